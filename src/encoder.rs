pub(crate) mod gsm;
pub(crate) mod utf16;

pub use gsm::Gsm;
pub use utf16::Utf16;

pub const GSM_NAME: &str = "GSM";
pub const UTF16_NAME: &str = "UTF-16";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' cannot be encoded with the given encoder")]
pub struct NotEncodable(pub char);

pub trait Encoder {
    fn name(&self) -> &'static str;
    fn code_point_bits(&self) -> u32;
    fn code_points(&self, c: char) -> Result<u8, NotEncodable>;

    #[inline]
    fn is_encodable(&self, text: &str) -> bool {
        text.chars().all(|c| self.code_points(c).is_ok())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Gsm,
    Utf16,
}

impl Scheme {
    pub const ALL: [Scheme; 2] = [Scheme::Gsm, Scheme::Utf16];

    pub fn for_text(text: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.is_encodable(text))
            .unwrap_or(Scheme::Utf16)
    }
}

impl Encoder for Scheme {
    #[inline]
    fn name(&self) -> &'static str {
        match self {
            Scheme::Gsm => Gsm.name(),
            Scheme::Utf16 => Utf16.name(),
        }
    }

    #[inline]
    fn code_point_bits(&self) -> u32 {
        match self {
            Scheme::Gsm => Gsm.code_point_bits(),
            Scheme::Utf16 => Utf16.code_point_bits(),
        }
    }

    #[inline]
    fn code_points(&self, c: char) -> Result<u8, NotEncodable> {
        match self {
            Scheme::Gsm => Gsm.code_points(c),
            Scheme::Utf16 => Utf16.code_points(c),
        }
    }

    #[inline]
    fn is_encodable(&self, text: &str) -> bool {
        match self {
            Scheme::Gsm => Gsm.is_encodable(text),
            Scheme::Utf16 => Utf16.is_encodable(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_widths() {
        assert_eq!(Scheme::Gsm.name(), "GSM");
        assert_eq!(Scheme::Gsm.code_point_bits(), 7);
        assert_eq!(Scheme::Utf16.name(), "UTF-16");
        assert_eq!(Scheme::Utf16.code_point_bits(), 16);
    }

    #[test]
    fn dispatch_matches_variants() {
        for c in ['A', '{', '€', '好', '😀', '\n'] {
            assert_eq!(Scheme::Gsm.code_points(c), Gsm.code_points(c));
            assert_eq!(Scheme::Utf16.code_points(c), Utf16.code_points(c));
        }
        assert!(!Scheme::Gsm.is_encodable("HELLO 好"));
        assert!(Scheme::Utf16.is_encodable("HELLO 好"));
    }

    #[test]
    fn for_text_prefers_gsm() {
        assert_eq!(Scheme::for_text(""), Scheme::Gsm);
        assert_eq!(Scheme::for_text("HELLO {world}"), Scheme::Gsm);
        assert_eq!(Scheme::for_text("HELLO 好"), Scheme::Utf16);
        assert_eq!(Scheme::for_text("😀"), Scheme::Utf16);
    }

    #[test]
    fn not_encodable_message() {
        assert_eq!(
            NotEncodable('好').to_string(),
            "'好' cannot be encoded with the given encoder"
        );
    }

    struct Counting<'a> {
        calls: &'a std::cell::Cell<usize>,
    }

    impl Encoder for Counting<'_> {
        fn name(&self) -> &'static str {
            Gsm.name()
        }

        fn code_point_bits(&self) -> u32 {
            Gsm.code_point_bits()
        }

        fn code_points(&self, c: char) -> Result<u8, NotEncodable> {
            self.calls.set(self.calls.get() + 1);
            Gsm.code_points(c)
        }
    }

    #[test]
    fn is_encodable_stops_at_first_failure() {
        let calls = std::cell::Cell::new(0);
        let encoder = Counting { calls: &calls };
        assert!(!encoder.is_encodable("A好BCDEFG"));
        assert_eq!(calls.get(), 2);

        calls.set(0);
        assert!(!encoder.is_encodable("好"));
        assert_eq!(calls.get(), 1);

        calls.set(0);
        assert!(encoder.is_encodable("HELLO"));
        assert_eq!(calls.get(), 5);
    }

    #[test]
    fn shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync + 'static>(_: T) {}
        assert_send_sync(Scheme::Gsm);
        assert_send_sync(Gsm);
        assert_send_sync(Utf16);
        static SHARED: Scheme = Scheme::Gsm;
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| SHARED.code_points('€')))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().ok(), Some(Ok(2)));
        }
    }
}
