use crate::error::{Error, Result};

/// An LZ77 token.
///
/// When a match is found, the token is:
///   (distance, length, next)
///
/// If no match is found, then distance and length are zero, and `next` is the literal.
/// `next` is `None` only for a final token whose match runs to the end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub distance: usize,
    pub length: usize,
    pub next: Option<u8>,
}

impl Token {
    /// Nominal size of one token (distance, length, literal) used for reporting.
    pub const SIZE: usize = 3;

    pub fn literal(byte: u8) -> Self {
        Self {
            distance: 0,
            length: 0,
            next: Some(byte),
        }
    }

    /// Whether the token carries a back-reference.
    pub fn is_match(&self) -> bool {
        self.length > 0
    }
}

/// LZ77 compressor with a fixed window size.
///
/// The match source must end before the cursor and the match length stays below
/// the window size. Among equally long matches the closest one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lz77 {
    window_size: usize,
}

impl Lz77 {
    /// # Errors
    ///
    /// [`Error::InvalidWindow`] if `window_size` is zero.
    pub fn new(window_size: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(Error::InvalidWindow { window_size });
        }
        Ok(Self { window_size })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Compress `input` into a token sequence.
    pub fn compress(&self, input: &[u8]) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut i = 0;
        while i < input.len() {
            let (distance, length) = self.longest_match(input, i);
            // If the match reaches to the end, then next is None.
            let next = input.get(i + length).copied();
            tokens.push(Token {
                distance,
                length,
                next,
            });
            i += length + 1;
        }
        log::debug!(
            "LZ77 compressed {} bytes into {} tokens (window {})",
            input.len(),
            tokens.len(),
            self.window_size
        );
        tokens
    }

    /// Longest match for the run at `cursor`, as (distance, length).
    fn longest_match(&self, input: &[u8], cursor: usize) -> (usize, usize) {
        let search_start = cursor.saturating_sub(self.window_size);
        let max_length = (self.window_size - 1).min(input.len() - cursor);
        let mut best_length = 0;
        let mut best_distance = 0;

        // Nearest candidates first, so equal lengths keep the smallest distance.
        for j in (search_start..cursor).rev() {
            if best_length == max_length {
                break;
            }
            let limit = max_length.min(cursor - j);
            let length = input[j..j + limit]
                .iter()
                .zip(&input[cursor..cursor + limit])
                .take_while(|(a, b)| a == b)
                .count();
            if length > best_length {
                best_length = length;
                best_distance = cursor - j;
            }
        }
        (best_distance, best_length)
    }
}

/// Compress the input data using the LZ77 algorithm.
///
/// # Parameters
///
/// - `input`: the data to compress as a byte slice.
/// - `window_size`: the maximum number of previous bytes to search for a match.
///
/// # Returns
///
/// A vector of `Token` representing the compressed data.
///
/// # Example
///
/// ```
/// use huffshift::compression::lz77::compress;
///
/// let data = b"abracadabra abracadabra";
/// let tokens = compress(data, 16).unwrap();
/// assert!(tokens.len() < data.len());
/// ```
pub fn compress(input: &[u8], window_size: usize) -> Result<Vec<Token>> {
    Ok(Lz77::new(window_size)?.compress(input))
}

/// Decompress a sequence of LZ77 tokens into the original data.
///
/// # Errors
///
/// [`Error::InvalidToken`] if a back-reference reaches before the start of the output.
///
/// # Example
///
/// ```
/// use huffshift::compression::lz77::{compress, decompress};
///
/// let data = b"abracadabra abracadabra";
/// let tokens = compress(data, 16).unwrap();
/// let decompressed = decompress(&tokens).unwrap();
/// assert_eq!(decompressed, data);
/// ```
pub fn decompress(tokens: &[Token]) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    for (index, token) in tokens.iter().enumerate() {
        // If length > 0, copy the matching substring from output.
        if token.length > 0 {
            if token.distance == 0 || token.distance > output.len() {
                return Err(Error::InvalidToken {
                    index,
                    distance: token.distance,
                    available: output.len(),
                });
            }
            let start = output.len() - token.distance;
            for i in 0..token.length {
                output.push(output[start + i]);
            }
        }
        // Append the literal (if present).
        if let Some(byte) = token.next {
            output.push(byte);
        }
    }
    Ok(output)
}
