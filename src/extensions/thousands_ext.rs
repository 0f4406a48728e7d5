/// Renders an integer with `,` between groups of three digits.
pub trait ThousandsSeparated {
    fn separated(self) -> String;
}

macro_rules! impl_thousands_separated {
    ($($t:ty)*) => ($(
        impl ThousandsSeparated for $t {
            fn separated(self) -> String {
                let rendered = self.to_string();
                let (sign, digits) = match rendered.strip_prefix('-') {
                    Some(digits) => ("-", digits),
                    None => ("", rendered.as_str()),
                };

                let mut out = String::with_capacity(rendered.len() + digits.len() / 3);
                out.push_str(sign);
                for (i, c) in digits.chars().enumerate() {
                    if i > 0 && (digits.len() - i) % 3 == 0 {
                        out.push(',');
                    }
                    out.push(c);
                }
                out
            }
        }
    )*)
}

impl_thousands_separated! { u32 u64 usize i32 i64 }
