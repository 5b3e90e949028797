//! Embedded locale data set.

use super::bundle::{BundleSpec, FieldLabels};

/// Bundle used when a country has no table entry.
///
/// `country` and `country_localized` are placeholders here; the resolver
/// echoes the caller's country text instead.
pub const ENGLISH_FALLBACK: BundleSpec = BundleSpec {
    country: "",
    language: "English",
    language_localized: "English",
    greeting_word: "Hello",
    greeting_template: "{greeting}, {name}!",
    locale_tag: "en-US",
    country_localized: "",
    labels: FieldLabels::ENGLISH,
};

const fn english(country: &'static str, locale_tag: &'static str) -> BundleSpec {
    BundleSpec {
        country,
        language: "English",
        language_localized: "English",
        greeting_word: "Hello",
        greeting_template: "{greeting}, {name}!",
        locale_tag,
        country_localized: country,
        labels: FieldLabels::ENGLISH,
    }
}

/// Supported countries in presentation order.
pub const COUNTRIES: &[BundleSpec] = &[
    BundleSpec {
        country: "Japan",
        language: "Japanese",
        language_localized: "日本語",
        greeting_word: "こんにちは",
        greeting_template: "{greeting}、{name}さん！",
        locale_tag: "ja-JP",
        country_localized: "日本",
        labels: FieldLabels {
            name: "名前",
            address: "住所",
            country: "国",
            language: "言語",
        },
    },
    BundleSpec {
        country: "France",
        language: "French",
        language_localized: "Français",
        greeting_word: "Bonjour",
        greeting_template: "{greeting}, {name} !",
        locale_tag: "fr-FR",
        country_localized: "France",
        labels: FieldLabels {
            name: "Nom",
            address: "Adresse",
            country: "Pays",
            language: "Langue",
        },
    },
    BundleSpec {
        country: "Spain",
        language: "Spanish",
        language_localized: "Español",
        greeting_word: "Hola",
        greeting_template: "¡{greeting}, {name}!",
        locale_tag: "es-ES",
        country_localized: "España",
        labels: FieldLabels {
            name: "Nombre",
            address: "Dirección",
            country: "País",
            language: "Idioma",
        },
    },
    BundleSpec {
        country: "Germany",
        language: "German",
        language_localized: "Deutsch",
        greeting_word: "Hallo",
        greeting_template: "{greeting}, {name}!",
        locale_tag: "de-DE",
        country_localized: "Deutschland",
        labels: FieldLabels {
            name: "Name",
            address: "Adresse",
            country: "Land",
            language: "Sprache",
        },
    },
    BundleSpec {
        country: "Italy",
        language: "Italian",
        language_localized: "Italiano",
        greeting_word: "Ciao",
        greeting_template: "{greeting}, {name}!",
        locale_tag: "it-IT",
        country_localized: "Italia",
        labels: FieldLabels {
            name: "Nome",
            address: "Indirizzo",
            country: "Paese",
            language: "Lingua",
        },
    },
    BundleSpec {
        country: "China",
        language: "Chinese",
        language_localized: "中文",
        greeting_word: "你好",
        greeting_template: "{greeting}，{name}！",
        locale_tag: "zh-CN",
        country_localized: "中国",
        labels: FieldLabels {
            name: "姓名",
            address: "地址",
            country: "国家",
            language: "语言",
        },
    },
    BundleSpec {
        country: "Korea",
        language: "Korean",
        language_localized: "한국어",
        greeting_word: "안녕하세요",
        greeting_template: "{greeting}, {name}님!",
        locale_tag: "ko-KR",
        country_localized: "대한민국",
        labels: FieldLabels {
            name: "이름",
            address: "주소",
            country: "국가",
            language: "언어",
        },
    },
    BundleSpec {
        country: "Brazil",
        language: "Portuguese",
        language_localized: "Português",
        greeting_word: "Olá",
        greeting_template: "{greeting}, {name}!",
        locale_tag: "pt-BR",
        country_localized: "Brasil",
        labels: FieldLabels {
            name: "Nome",
            address: "Endereço",
            country: "País",
            language: "Idioma",
        },
    },
    BundleSpec {
        country: "India",
        language: "Hindi",
        language_localized: "हिन्दी",
        greeting_word: "नमस्ते",
        greeting_template: "{greeting} {name}!",
        locale_tag: "hi-IN",
        country_localized: "भारत",
        labels: FieldLabels {
            name: "नाम",
            address: "पता",
            country: "देश",
            language: "भाषा",
        },
    },
    english("Canada", "en-CA"),
    english("United States", "en-US"),
    english("United Kingdom", "en-GB"),
];
