//! Placeholder directive parsing.
//!
//! A directive is the text between `{` and `}` in a template:
//! `index[,width][:specifier[precision]]`. The scanner is a single
//! left-to-right pass over four states and never fails; unrecognized
//! characters are skipped and unset fields keep their defaults.

// ---------------------------------------------------------------------------
// Directive
// ---------------------------------------------------------------------------

/// Specifier character of a directive that requested no base or notation
/// change. Uppercase, so default insertions render hex digits, exponent
/// letters, and non-finite floats in uppercase unless a lowercase specifier
/// says otherwise.
pub const GENERIC_SPECIFIER: char = 'G';

/// One parsed `{...}` placeholder.
///
/// Transient: built fresh for every placeholder on every render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    /// Zero-based position of the referenced argument.
    pub index: usize,
    /// Minimum field width; 0 requests no padding.
    pub width: usize,
    /// Base/notation selector; see [`Specifier::classify`]. Case selects
    /// uppercase or lowercase rendering of letters in the output.
    pub specifier: char,
    /// Digits after the decimal point (fixed/scientific) or significant
    /// digits (generic); 0 means unspecified.
    pub precision: usize,
}

impl Default for Directive {
    fn default() -> Self {
        Self {
            index: 0,
            width: 0,
            specifier: GENERIC_SPECIFIER,
            precision: 0,
        }
    }
}

impl Directive {
    /// Whether letters produced under this directive render uppercase.
    #[must_use]
    pub fn uppercase(&self) -> bool {
        self.specifier.is_uppercase()
    }

    /// Base/notation class of the specifier character.
    #[must_use]
    pub fn class(&self) -> Specifier {
        Specifier::classify(self.specifier)
    }
}

// ---------------------------------------------------------------------------
// Specifier classification
// ---------------------------------------------------------------------------

/// Recognized specifier classes. Classification is case-insensitive; case
/// is carried separately by [`Directive::uppercase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specifier {
    /// `d`: decimal integers.
    Decimal,
    /// `e`: scientific/exponential notation.
    Scientific,
    /// `f`: fixed-point notation.
    Fixed,
    /// `o`: octal integers.
    Octal,
    /// `x`: hexadecimal integers.
    Hex,
    /// Anything else: default insertion, no base or notation change.
    Generic,
}

impl Specifier {
    /// Classifies a specifier character, case-insensitively.
    #[must_use]
    pub fn classify(c: char) -> Self {
        match c.to_ascii_lowercase() {
            'd' => Self::Decimal,
            'e' => Self::Scientific,
            'f' => Self::Fixed,
            'o' => Self::Octal,
            'x' => Self::Hex,
            _ => Self::Generic,
        }
    }
}

// ---------------------------------------------------------------------------
// Scanner
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Index,
    Width,
    Specifier,
    Precision,
}

/// Parses the text between `{` and `}` (delimiters excluded) into a
/// [`Directive`].
///
/// Digits accumulate into the numeric field of the current state. `,`
/// switches to width and `:` to specifier, from any state. In the specifier
/// state the first alphabetic character is captured and the scan moves on
/// to precision; digits there are skipped. Everything else is ignored. The
/// scanner never fails: malformed input produces partial or default fields.
#[must_use]
pub fn parse_directive(body: &str) -> Directive {
    let mut directive = Directive::default();
    let mut state = ScanState::Index;
    for c in body.chars() {
        if let Some(digit) = c.to_digit(10) {
            let digit = digit as usize;
            match state {
                ScanState::Index => {
                    directive.index = directive.index.saturating_mul(10).saturating_add(digit);
                }
                ScanState::Width => {
                    directive.width = directive.width.saturating_mul(10).saturating_add(digit);
                }
                ScanState::Precision => {
                    directive.precision =
                        directive.precision.saturating_mul(10).saturating_add(digit);
                }
                ScanState::Specifier => {}
            }
        } else if c == ':' {
            state = ScanState::Specifier;
        } else if c == ',' {
            state = ScanState::Width;
        } else if c.is_alphabetic() && state == ScanState::Specifier {
            directive.specifier = c;
            state = ScanState::Precision;
        }
    }
    directive
}
