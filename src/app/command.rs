#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Ask the command source for `query`; the answer comes back tagged with
    /// `generation`.
    Search { query: String, generation: u64 },
}
