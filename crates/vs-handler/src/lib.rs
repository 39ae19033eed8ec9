//! Coin-flip decision handler for the voice skill.

pub mod coin;
pub mod random;

pub use coin::{speech_for_draw, CoinFace, ERROR_SPEECH};
pub use random::{FixedSequence, RandomSource, SeededRandom, ThreadRandom};

use vs_core::{build_speech_response, Request, Response};

/// Answer a request with the outcome of one coin flip.
///
/// Consumes exactly one draw from `rng`. The request is only read for
/// logging; every request gets a flip.
pub fn handle<R: RandomSource + ?Sized>(request: &Request, rng: &mut R) -> Response {
    let draw = rng.draw(CoinFace::COUNT);
    let speech = speech_for_draw(draw);
    tracing::debug!(
        request_id = %request.request.request_id,
        kind = %request.request.kind(),
        draw,
        speech,
        "coin flipped"
    );
    build_speech_response(speech)
}
