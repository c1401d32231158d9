#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    Search(String),
    CancelSearch,
    LoadDetails(String),
    CancelDetails,
    ScheduleClearMessage(u64), // delay in milliseconds
    Batch(Vec<Command>),
}

impl Command {
    /// Joins two commands, dropping `None`s.
    pub fn and(self, next: Command) -> Command {
        match (self, next) {
            (Command::None, c) | (c, Command::None) => c,
            (Command::Batch(mut cmds), Command::Batch(more)) => {
                cmds.extend(more);
                Command::Batch(cmds)
            }
            (Command::Batch(mut cmds), c) => {
                cmds.push(c);
                Command::Batch(cmds)
            }
            (c, next) => Command::Batch(vec![c, next]),
        }
    }
}
