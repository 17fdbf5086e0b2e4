//! Closed enumerations used as classification results.
//!
//! The discriminants are the stable byte values callers persist or pass
//! across the FFI boundary, so they must never be renumbered.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Unicode general category.
///
/// Value 17 is not assigned to any category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum GeneralCategory {
    Unassigned = 0,
    UppercaseLetter = 1,
    LowercaseLetter = 2,
    TitlecaseLetter = 3,
    ModifierLetter = 4,
    OtherLetter = 5,
    NonSpacingMark = 6,
    EnclosingMark = 7,
    CombiningSpacingMark = 8,
    DecimalDigitNumber = 9,
    LetterNumber = 10,
    OtherNumber = 11,
    SpaceSeparator = 12,
    LineSeparator = 13,
    ParagraphSeparator = 14,
    Control = 15,
    Format = 16,
    PrivateUse = 18,
    Surrogate = 19,
    DashPunctuation = 20,
    StartPunctuation = 21,
    EndPunctuation = 22,
    ConnectorPunctuation = 23,
    OtherPunctuation = 24,
    MathSymbol = 25,
    CurrencySymbol = 26,
    ModifierSymbol = 27,
    OtherSymbol = 28,
    InitialQuotePunctuation = 29,
    FinalQuotePunctuation = 30,
}

impl GeneralCategory {
    /// Create a category from its byte value, `None` for 17 and anything above 30.
    #[inline]
    pub fn from_u8(v: u8) -> Option<Self> {
        Self::try_from(v).ok()
    }

    pub fn is_letter(&self) -> bool {
        matches!(
            self,
            Self::UppercaseLetter
                | Self::LowercaseLetter
                | Self::TitlecaseLetter
                | Self::ModifierLetter
                | Self::OtherLetter
        )
    }

    pub fn is_number(&self) -> bool {
        matches!(
            self,
            Self::DecimalDigitNumber | Self::LetterNumber | Self::OtherNumber
        )
    }

    pub fn is_separator(&self) -> bool {
        matches!(
            self,
            Self::SpaceSeparator | Self::LineSeparator | Self::ParagraphSeparator
        )
    }

    pub fn is_punctuation(&self) -> bool {
        matches!(
            self,
            Self::DashPunctuation
                | Self::StartPunctuation
                | Self::EndPunctuation
                | Self::ConnectorPunctuation
                | Self::OtherPunctuation
                | Self::InitialQuotePunctuation
                | Self::FinalQuotePunctuation
        )
    }
}

/// Bidirectional character type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum Directionality {
    Undefined = -1,
    LeftToRight = 0,
    RightToLeft = 1,
    RightToLeftArabic = 2,
    EuropeanNumber = 3,
    EuropeanNumberSeparator = 4,
    EuropeanNumberTerminator = 5,
    ArabicNumber = 6,
    CommonNumberSeparator = 7,
    NonspacingMark = 8,
    BoundaryNeutral = 9,
    ParagraphSeparator = 10,
    SegmentSeparator = 11,
    Whitespace = 12,
    OtherNeutrals = 13,
    LeftToRightEmbedding = 14,
    LeftToRightOverride = 15,
    RightToLeftEmbedding = 16,
    RightToLeftOverride = 17,
    PopDirectionalFormat = 18,
}

impl Directionality {
    /// Create a directionality from its byte value, falling back to `Undefined`.
    #[inline]
    pub fn from_i8(v: i8) -> Self {
        Self::try_from(v).unwrap_or(Directionality::Undefined)
    }
}
