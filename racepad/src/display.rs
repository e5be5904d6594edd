//! Status display.
//!
//! The pad shows the active mode as `Layer: <name>`. Rendering is pulled from
//! the scheduler tick by [`DisplayAdapter`], the panel itself is anything that
//! implements [`StatusDisplay`].
use core::fmt::Write;

use embassy_time::Duration;

use crate::clock::Timestamp;
use crate::config::DisplayConfig;
use crate::layer::Mode;

/// Text sink for the status display.
///
/// Best effort: implementations swallow their own errors.
pub trait StatusDisplay {
    fn clear(&mut self);
    fn write_line(&mut self, text: &str);
}

impl<D: StatusDisplay + ?Sized> StatusDisplay for &mut D {
    fn clear(&mut self) {
        (**self).clear()
    }

    fn write_line(&mut self, text: &str) {
        (**self).write_line(text)
    }
}

/// Display for pads without a screen
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDisplay;

impl StatusDisplay for NoopDisplay {
    fn clear(&mut self) {}

    fn write_line(&mut self, _text: &str) {}
}

/// Decides when the status display needs a redraw and renders it.
pub struct DisplayAdapter<D: StatusDisplay> {
    display: D,
    refresh_interval: Duration,
    last_refresh: Timestamp,
    /// Mode currently on screen, `None` before the first render
    rendered: Option<Mode>,
}

impl<D: StatusDisplay> DisplayAdapter<D> {
    pub fn new(display: D, config: DisplayConfig) -> Self {
        Self {
            display,
            refresh_interval: config.refresh_interval,
            last_refresh: Timestamp::default(),
            rendered: None,
        }
    }

    /// Redraw if the mode changed or the refresh interval elapsed.
    ///
    /// Returns true if the display was redrawn.
    pub fn on_tick(&mut self, mode: Mode, now: Timestamp) -> bool {
        let due = match self.rendered {
            None => true,
            Some(m) if m != mode => true,
            Some(_) => now.has_elapsed(self.last_refresh, self.refresh_interval),
        };
        if !due {
            return false;
        }
        self.render(mode);
        self.rendered = Some(mode);
        self.last_refresh = now;
        true
    }

    fn render(&mut self, mode: Mode) {
        let mut line: heapless::String<16> = heapless::String::new();
        if write!(line, "Layer: {}", mode.name()).is_err() {
            warn!("Status line truncated");
        }
        self.display.clear();
        self.display.write_line(&line);
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}

#[cfg(feature = "display")]
pub use text_display::TextDisplay;

#[cfg(feature = "display")]
mod text_display {
    use embedded_graphics::mono_font::MonoTextStyle;
    use embedded_graphics::mono_font::ascii::FONT_6X10;
    use embedded_graphics::pixelcolor::BinaryColor;
    use embedded_graphics::prelude::*;
    use embedded_graphics::text::{Baseline, Text};

    use super::StatusDisplay;

    const LINE_HEIGHT: i32 = 10;

    /// [`StatusDisplay`] on top of a monochrome `embedded-graphics` draw target.
    ///
    /// Lines are stacked from the top of the panel, [`StatusDisplay::clear`]
    /// starts over at the first line. Flushing the framebuffer to the panel,
    /// if the driver needs it, is left to the caller.
    pub struct TextDisplay<D: DrawTarget<Color = BinaryColor>> {
        target: D,
        line: i32,
    }

    impl<D: DrawTarget<Color = BinaryColor>> TextDisplay<D> {
        pub fn new(target: D) -> Self {
            Self { target, line: 0 }
        }

        pub fn target(&self) -> &D {
            &self.target
        }
    }

    impl<D: DrawTarget<Color = BinaryColor>> StatusDisplay for TextDisplay<D> {
        fn clear(&mut self) {
            self.target.clear(BinaryColor::Off).ok();
            self.line = 0;
        }

        fn write_line(&mut self, text: &str) {
            let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
            Text::with_baseline(text, Point::new(0, self.line * LINE_HEIGHT), style, Baseline::Top)
                .draw(&mut self.target)
                .ok();
            self.line += 1;
        }
    }

    #[cfg(test)]
    mod test {
        use embedded_graphics::mock_display::MockDisplay;

        use super::*;

        fn lit_rows(display: &MockDisplay<BinaryColor>) -> (i32, i32) {
            let mut rows = (i32::MAX, i32::MIN);
            for y in 0..64 {
                for x in 0..64 {
                    if display.get_pixel(Point::new(x, y)) == Some(BinaryColor::On) {
                        rows = (rows.0.min(y), rows.1.max(y));
                    }
                }
            }
            rows
        }

        fn mock() -> MockDisplay<BinaryColor> {
            let mut display = MockDisplay::new();
            display.set_allow_overdraw(true);
            display.set_allow_out_of_bounds_drawing(true);
            display
        }

        #[test]
        fn test_lines_stack_and_clear_resets() {
            let mut display = TextDisplay::new(mock());
            display.clear();
            display.write_line("Layer: Pit");
            let (top, bottom) = lit_rows(display.target());
            assert!(top >= 0 && bottom < LINE_HEIGHT);

            display.write_line("Jiggler");
            assert!(lit_rows(display.target()).1 >= LINE_HEIGHT);

            display.clear();
            assert_eq!(lit_rows(display.target()), (i32::MAX, i32::MIN));
            display.write_line("Layer: Utility");
            assert!(lit_rows(display.target()).1 < LINE_HEIGHT);
        }
    }
}
