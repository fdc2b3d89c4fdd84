#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppMode {
    Repl,
    Quit,
}
