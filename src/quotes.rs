//! Motivational quote rotation shown above the task list. The engine only
//! tracks which quote is current; the collaborator layer decides the cadence.

/// The fixed quote list, cycled in order
pub const QUOTES: [&str; 10] = [
    "The way to get started is to quit talking and begin doing. - Walt Disney",
    "Don't let yesterday take up too much of today. - Will Rogers",
    "You learn more from failure than from success. - Unknown",
    "It's not whether you get knocked down, it's whether you get up. - Vince Lombardi",
    "If you are working on something that you really care about, you don't have to be pushed. - Steve Jobs",
    "Success is not final, failure is not fatal: it is the courage to continue that counts. - Winston Churchill",
    "Don't be afraid to give up the good to go for the great. - John D. Rockefeller",
    "The future belongs to those who believe in the beauty of their dreams. - Eleanor Roosevelt",
    "It is during our darkest moments that we must focus to see the light. - Aristotle",
    "Believe you can and you're halfway there. - Theodore Roosevelt",
];

/// Cycles through [`QUOTES`], wrapping at the end
#[derive(Debug, Clone, Default)]
pub struct QuoteRotation {
    index: usize,
}

impl QuoteRotation {
    pub fn new() -> QuoteRotation {
        QuoteRotation::default()
    }

    /// The quote currently showing
    pub fn current(&self) -> &'static str {
        QUOTES[self.index]
    }

    /// Move to the next quote, wrapping back to the first after the last
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % QUOTES.len();
    }
}
