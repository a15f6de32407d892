//! Conversation-history amortization model
//!
//! Single source of truth for how multi-turn context is billed. Every
//! calculator with conversational context delegates here instead of
//! re-deriving the cached/non-cached split for its own modality mix.
//!
//! The routine accounts for the resent anchor (base prompt, plus the
//! rolling summary in summary mode), summarization calls, and full-mode
//! history growth. The live turn's own input is charged by each
//! calculator in its own modality (text tokens for a chatbot, audio
//! tokens for omni/STS) and is deliberately not part of this model.

/// History retention policy, resolved from session inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HistoryPolicy {
    /// No history carried between exchanges; only the anchor is resent
    None,
    /// Fixed-size rolling summary, refreshed every `refresh_every` exchanges
    Summary {
        summary_tokens: f64,
        refresh_every: u32,
    },
    /// Verbatim history resent every turn, never cached
    Full,
}

/// Token volumes produced by the amortization model
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HistoryUsage {
    /// Tokens billed at the cached-input rate
    pub cached_tokens: f64,
    /// History and summarization tokens billed at the full input rate
    pub non_cached_tokens: f64,
    /// Output tokens generated by summarization calls
    pub extra_output_tokens: f64,
}

/// Amortize conversation history over `exchanges` turns
///
/// `input_tokens_per_exchange` / `output_tokens_per_exchange` are the
/// text-equivalent volumes of one exchange. When `caching_available` is
/// false the anchor volume is billed at the full input rate instead of
/// being split out as cached.
pub fn amortize(
    policy: HistoryPolicy,
    input_tokens_per_exchange: f64,
    output_tokens_per_exchange: f64,
    base_prompt_tokens: f64,
    exchanges: u32,
    caching_available: bool,
) -> HistoryUsage {
    let n = exchanges as f64;
    let mut usage = HistoryUsage::default();

    // Anchor volume resent on every exchange: base prompt, plus the
    // rolling summary in summary mode.
    let anchor_tokens = match policy {
        HistoryPolicy::Summary { summary_tokens, .. } => (base_prompt_tokens + summary_tokens) * n,
        HistoryPolicy::Full | HistoryPolicy::None => base_prompt_tokens * n,
    };
    if caching_available {
        usage.cached_tokens = anchor_tokens;
    } else {
        usage.non_cached_tokens = anchor_tokens;
    }

    match policy {
        HistoryPolicy::Summary {
            summary_tokens,
            refresh_every,
        } => {
            let calls = if refresh_every == 0 {
                0
            } else {
                exchanges / refresh_every
            };
            // Each summarization call reads the average accumulated history
            // at the midpoint of the refresh window and writes one summary.
            let avg_history_at_summary = (input_tokens_per_exchange + output_tokens_per_exchange)
                * (refresh_every as f64 / 2.0);
            usage.non_cached_tokens += avg_history_at_summary * calls as f64;
            usage.extra_output_tokens = summary_tokens * calls as f64;
        }
        HistoryPolicy::Full => {
            // History grows turn by turn: turn i resends everything said in
            // turns 0..i.
            let per_turn = input_tokens_per_exchange + output_tokens_per_exchange;
            let mut accumulated = 0.0;
            let mut history_total = 0.0;
            for _ in 0..exchanges {
                history_total += accumulated;
                accumulated += per_turn;
            }
            usage.non_cached_tokens += history_total;
        }
        HistoryPolicy::None => {}
    }

    usage
}
