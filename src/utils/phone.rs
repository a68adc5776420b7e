//! Phone number formatting for contact points.

/// Formats a raw phone number for display in structured data.
///
/// Raw numbers in config are digit strings without the leading `+`
/// (e.g. `"79991234567"`).
pub trait PhoneFormat {
    fn format_phone(&self, raw: &str) -> String;
}

/// International format.
///
/// | Digits | Output               |
/// |--------|----------------------|
/// | 11     | `+7 (999) 123-45-67` |
/// | other  | `+<digits>`          |
///
/// Non-digit characters in the input are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct InternationalPhone;

impl PhoneFormat for InternationalPhone {
    fn format_phone(&self, raw: &str) -> String {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

        if digits.len() != 11 {
            return format!("+{digits}");
        }

        format!(
            "+{} ({}) {}-{}-{}",
            &digits[0..1],
            &digits[1..4],
            &digits[4..7],
            &digits[7..9],
            &digits[9..11]
        )
    }
}

impl<F> PhoneFormat for F
where
    F: Fn(&str) -> String,
{
    fn format_phone(&self, raw: &str) -> String {
        self(raw)
    }
}
