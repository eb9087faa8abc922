/// How a segment or a whole run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunExitSignal {
    Continue,
    Cancelled,
}
