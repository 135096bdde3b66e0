/// Whether a run should actually touch the network, or only report what it would do.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum RunType<T> {
    /// No I/O should happen—just describe where the issue body would come from.
    DryRun(T),
    /// This is a real run, actually fetch and convert the issue.
    Real(T),
}

impl<T> RunType<T> {
    pub(crate) fn take(self) -> (RunType<()>, T) {
        match self {
            RunType::DryRun(inner) => (RunType::DryRun(()), inner),
            RunType::Real(inner) => (RunType::Real(()), inner),
        }
    }
}
