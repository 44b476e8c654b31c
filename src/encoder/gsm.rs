use crate::encoder::{Encoder, NotEncodable, GSM_NAME};

const CODE_POINT_BITS: u32 = 7;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gsm;

impl Gsm {
    pub const fn new() -> Self {
        Gsm
    }
}

impl Encoder for Gsm {
    #[inline]
    fn name(&self) -> &'static str {
        GSM_NAME
    }

    #[inline]
    fn code_point_bits(&self) -> u32 {
        CODE_POINT_BITS
    }

    #[inline]
    fn code_points(&self, c: char) -> Result<u8, NotEncodable> {
        code_points(c).ok_or(NotEncodable(c))
    }
}

// Extension characters are sent as ESC followed by their table position.
#[inline]
const fn code_points(c: char) -> Option<u8> {
    match c {
        '0'..='9' | 'A'..='Z' | 'a'..='z' => Some(1),
        '@' | '£' | '$' | '¥' | 'è' | 'é' | 'ù' | 'ì' | 'ò' | 'Ç' | '\n' | 'Ø' | 'ø' | '\r'
        | 'Å' | 'å' => Some(1),
        'Δ' | '_' | 'Φ' | 'Γ' | 'Λ' | 'Ω' | 'Π' | 'Ψ' | 'Σ' | 'Θ' | 'Ξ' | 'Æ' | 'æ' | 'ß'
        | 'É' => Some(1),
        ' ' | '!' | '"' | '#' | '¤' | '%' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | '-'
        | '.' | '/' => Some(1),
        ':' | ';' | '<' | '=' | '>' | '?' => Some(1),
        '¡' | 'Ä' | 'Ö' | 'Ñ' | 'Ü' | '§' => Some(1),
        '¿' | 'ä' | 'ö' | 'ñ' | 'ü' | 'à' => Some(1),
        '^' | '{' | '}' | '\\' | '[' | '~' | ']' | '|' | '€' => Some(2),
        _ => None,
    }
}
