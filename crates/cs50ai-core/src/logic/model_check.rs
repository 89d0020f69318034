use crate::errors::{AiError, Result};
use crate::logic::sentence::{Model, Sentence};

/// Upper bound on distinct symbols; enumeration is 2^n models.
pub const MAX_MODEL_SYMBOLS: usize = 24;

/// Decide whether `knowledge` entails `query` by enumerating every model.
///
/// Entailment holds iff `query` is true in every model in which `knowledge`
/// is true. An unsatisfiable knowledge base therefore entails everything.
///
/// # Errors
///
/// Returns `TooManySymbols` when the combined symbol count exceeds
/// [`MAX_MODEL_SYMBOLS`].
pub fn model_check(knowledge: &Sentence, query: &Sentence) -> Result<bool> {
    let mut symbols = knowledge.symbols();
    symbols.extend(query.symbols());
    if symbols.len() > MAX_MODEL_SYMBOLS {
        return Err(AiError::TooManySymbols {
            count: symbols.len(),
            max: MAX_MODEL_SYMBOLS,
        });
    }

    let symbols: Vec<String> = symbols.into_iter().collect();
    let mut model = Model::new();
    let entailed = check_all(knowledge, query, &symbols, &mut model)?;

    tracing::debug!(
        symbols = symbols.len(),
        entailed,
        query = %query.formula(),
        "model check finished"
    );
    Ok(entailed)
}

/// Depth-first over the remaining symbols; `model` is reused, each level
/// overwrites its own symbol before descending.
fn check_all(
    knowledge: &Sentence,
    query: &Sentence,
    remaining: &[String],
    model: &mut Model,
) -> Result<bool> {
    match remaining.split_first() {
        None => {
            if knowledge.evaluate(model)? {
                query.evaluate(model)
            } else {
                Ok(true)
            }
        }
        Some((symbol, rest)) => {
            model.insert(symbol.clone(), true);
            if !check_all(knowledge, query, rest, model)? {
                return Ok(false);
            }
            model.insert(symbol.clone(), false);
            check_all(knowledge, query, rest, model)
        }
    }
}
