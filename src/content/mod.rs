//! Round content: the words and sentences players type against.
//!
//! Content lives behind `ContentProvider` so alternate sources (files,
//! remote lists) can substitute without touching engine or round logic.
//! `StaticContent` ships the embedded pools and is the default.

use crate::core::GameRng;

/// Source of words and sentences for round content.
pub trait ContentProvider {
    /// A random short word.
    fn random_word(&self, rng: &mut GameRng) -> String;

    /// A random sentence-length line.
    fn random_sentence(&self, rng: &mut GameRng) -> String;
}

/// One three-letter word per letter of the alphabet.
const WORDS: &[&str] = &[
    "aar", "bar", "car", "dar", "ear", "far", "gar", "har", "iar", "jar",
    "kar", "lar", "mar", "nar", "oar", "par", "qar", "rar", "sar", "tar",
    "uar", "var", "war", "xar", "yar", "zar",
];

/// A grab bag of lines worth practicing on: prose, code, punctuation soup.
const SENTENCES: &[&str] = &[
    "def _grad_input_padding(grad_output, input_size, stride,  dilation=None):",
    "min_sizes = [dim_size(d) for d in range(k)]",
    "One is the best Prime Number",
    "Brandon is the best One",
    "Time and reason must cooperate with each other to the final establishment of any principle;",
    "[MAN] A man ordered 2,000 drums of pink ping pong balls in Paris, France",
    "I Twitch when I think about the Discord",
    "In particular, PEOPLE who are used to SVN or P4 who want to throw away uncommitted changes",
    "He paid $120 (80 Euros!) per drum, which means he spent $240,000 on 200,000 pink ping pong balls",
    "to a file will often reach for revert before being told that they actually want reset.",
    "My dog is ALSO my dawg",
    "/a/&B#R{+1}>>[Bb] = X0 - 3 + @a rooftop ^ 32 + 12443678923458789 && 1 2 3 < 4.",
    "b){BALL} These pink ping pong balls measured 40mm (how many inches?) and",
    "def __init__(self, d_model: int = 512, nhead: int = 8, num_encoder_layers: int = 6",
    "num_decoder_layers: int = 6, dim_feedforward: int = 2048, dropout: float = 0.1,",
    "activation: str = 'relu', custom_encoder: Optional[Any] = None,",
    "custom_decoder: Optional[Any] = None) -> None:",
    "super(Transformer, self).__init__()",
    "The internet is AN AMAZING PLACE FULL OF INTERESTING facts",
    "Did you know the INTERNET crosses continental boundaries using a wire?!",
    "I am out of interesting facts to type here",
    "Others should contribute more SENTENCES to be used in the game",
];

/// The embedded content pools.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticContent;

impl ContentProvider for StaticContent {
    fn random_word(&self, rng: &mut GameRng) -> String {
        rng.choose(WORDS).copied().unwrap_or("bar").to_string()
    }

    fn random_sentence(&self, rng: &mut GameRng) -> String {
        rng.choose(SENTENCES)
            .copied()
            .unwrap_or("I am out of interesting facts to type here")
            .to_string()
    }
}
