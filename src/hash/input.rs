//! Input shapes accepted by the hash dispatch.

/// A value to hash, in one of the three shapes the value model produces.
///
/// The enum is the whole contract: a shape outside these three cannot be
/// constructed, so the dispatch has no failure path.
#[derive(Debug, Clone, Copy)]
pub enum HashInput<'a> {
    /// Small integer, hashed over its 4-byte little-endian encoding.
    /// Callers with wider values truncate to 32 bits before building this.
    Integer(u32),
    /// Raw byte sequence, hashed as-is.
    Bytes(&'a [u8]),
    /// Text, hashed over its UTF-8 bytes.
    Text(&'a str),
}
