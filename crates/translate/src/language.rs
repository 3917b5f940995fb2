use strum::VariantNames;

/// Languages speech can be synthesized in
///
/// Parsing is case-insensitive on the lowercase code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display, strum::AsRefStr, strum::VariantNames,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    Cherokee,
    Maori,
    Navajo,
    Welsh,
    Basque,
    Hawaiian,
    Ainu,
    Tibetan,
    Odia,
    Buryat,
    Khmer,
    Dzongkha,
}

impl Language {
    /// Lowercase codes of every supported language, in declaration order
    pub const fn codes() -> &'static [&'static str] {
        Self::VARIANTS
    }

    /// Human-readable name used in the translation instruction
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Cherokee => "Cherokee (ᏣᎳᎩ)",
            Self::Maori => "Māori (Te Reo Māori)",
            Self::Navajo => "Navajo (Diné Bizaad)",
            Self::Welsh => "Welsh (Cymraeg)",
            Self::Basque => "Basque (Euskara)",
            Self::Hawaiian => "Hawaiian (ʻŌlelo Hawaiʻi)",
            Self::Ainu => "Ainu (アイヌ・イタㇰ)",
            Self::Tibetan => "Tibetan (བོད་སྐད)",
            Self::Odia => "Odia (ଓଡ଼ିଆ)",
            Self::Buryat => "Buryat (Буряад хэлэн)",
            Self::Khmer => "Khmer (ភាសាខ្មែរ)",
            Self::Dzongkha => "Dzongkha (རྫོང་ཁ)",
        }
    }
}
