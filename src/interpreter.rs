/// The evaluator module checks the grammar and computes results.
///
/// The evaluator pulls tokens from the lexer one at a time, enforces the
/// `INTEGER '+' INTEGER` grammar through a single consume-and-check primitive,
/// and adds the two operands.
///
/// # Responsibilities
/// - Holds one token of lookahead and advances it only on a successful match.
/// - Reports grammar mismatches with the expected and actual token kinds.
/// - Reports overflow of the sum.
pub mod evaluator;
/// The lexer module tokenizes one line of input on demand.
///
/// The lexer reads the raw text left to right and produces integer literals,
/// the `+` operator and an end-of-input marker, skipping spaces. Tokens are
/// produced lazily, one per request.
///
/// # Responsibilities
/// - Applies maximal munch to digit runs.
/// - Keeps returning end-of-input once the text is exhausted.
/// - Reports lexical errors with the offending character and its position.
pub mod lexer;
