/// Create a layer in the layout, given as rows of actions
#[macro_export]
macro_rules! layer {
    ([$([$($x: expr), +]), +]) => {
        [$($($x), +), +]
    };
}

/// Create a normal key. For example, `k!(A)` represents `Action::EmitKey(KeyCode::A, ModifierCombination::new())`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::types::action::Action::EmitKey(
            $crate::types::keycode::KeyCode::$k,
            $crate::types::modifier::ModifierCombination::new(),
        )
    };
}

/// Create a normal key with modifier action
#[macro_export]
macro_rules! wm {
    ($x: ident, $m: expr) => {
        $crate::types::action::Action::EmitKey($crate::types::keycode::KeyCode::$x, $m)
    };
}

/// Create a shifted key
#[macro_export]
macro_rules! shifted {
    ($x: ident) => {
        $crate::wm!($x, $crate::types::modifier::SHIFT)
    };
}

/// Create a control-modified key
#[macro_export]
macro_rules! ctrl {
    ($x: ident) => {
        $crate::wm!($x, $crate::types::modifier::CTRL)
    };
}

/// Create an alt-modified key
#[macro_export]
macro_rules! alt {
    ($x: ident) => {
        $crate::wm!($x, $crate::types::modifier::ALT)
    };
}

/// Create a normal action: `Action`
#[macro_export]
macro_rules! a {
    ($a: ident) => {
        $crate::types::action::Action::$a
    };
}

/// Create an encoder action, the first argument is the clockwise action, the second is the counter-clockwise action
#[macro_export]
macro_rules! encoder {
    ($clockwise: expr, $counter_clockwise: expr) => {
        $crate::types::action::EncoderAction::new($clockwise, $counter_clockwise)
    };
}
