use crate::metaheuristic::aco::Message;
use crate::metaheuristic::Solution;

/// Receives a notification after every iteration. Purely observational.
pub trait Supervisor {
    fn notify(&mut self, message: &Message, best: Option<&Solution>);
}

impl Supervisor for () {
    fn notify(&mut self, _message: &Message, _best: Option<&Solution>) {}
}

impl<F> Supervisor for F
where
    F: FnMut(&Message, Option<&Solution>),
{
    fn notify(&mut self, message: &Message, best: Option<&Solution>) {
        self(message, best)
    }
}
