/// One tic's worth of player intent, sampled from the keyboard.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputCmd {
    pub forward: f32, // –1 … +1  (back / forward)
    pub turn: f32,    // –1 … +1  (left / right)
}
