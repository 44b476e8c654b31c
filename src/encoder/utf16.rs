use crate::encoder::{Encoder, NotEncodable, UTF16_NAME};

const CODE_POINT_BITS: u32 = 16;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Utf16;

impl Utf16 {
    pub const fn new() -> Self {
        Utf16
    }

    #[inline]
    pub fn units(c: char) -> u8 {
        let mut buffer = [0u16; 2];
        match c.encode_utf16(&mut buffer)[0] {
            0xD800..=0xDBFF => 2,
            _ => 1,
        }
    }
}

impl Encoder for Utf16 {
    #[inline]
    fn name(&self) -> &'static str {
        UTF16_NAME
    }

    #[inline]
    fn code_point_bits(&self) -> u32 {
        CODE_POINT_BITS
    }

    #[inline]
    fn code_points(&self, c: char) -> Result<u8, NotEncodable> {
        Ok(Self::units(c))
    }

    // a `str` only holds scalar values, all of which have a UTF-16 form
    #[inline]
    fn is_encodable(&self, _text: &str) -> bool {
        true
    }
}
