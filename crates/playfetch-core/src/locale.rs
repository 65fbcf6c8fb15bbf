//! Supported display locales and their message bundles.
//!
//! The active locale drives two things: the language of user-facing messages
//! and the `lang` parameter sent to the metadata provider. Bundles are
//! resolved through an exhaustive `match`, so adding a locale without a
//! bundle is a compile error.

use crate::error::FinderError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A supported display locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    Ar,
    Bn,
    #[default]
    En,
    Es,
    Fr,
    Hi,
    Pt,
    Ru,
    ZhCn,
}

impl Locale {
    /// All supported locales, in the order the language switcher lists them.
    pub const ALL: [Self; 9] = [
        Self::Ar,
        Self::Bn,
        Self::En,
        Self::Fr,
        Self::Hi,
        Self::ZhCn,
        Self::Pt,
        Self::Ru,
        Self::Es,
    ];

    /// Language tag sent to the provider (e.g. `"en"`, `"zh-CN"`).
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::Bn => "bn",
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::Hi => "hi",
            Self::Pt => "pt",
            Self::Ru => "ru",
            Self::ZhCn => "zh-CN",
        }
    }

    /// English name of the language.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Ar => "Arabic",
            Self::Bn => "Bengali",
            Self::En => "English",
            Self::Es => "Spanish",
            Self::Fr => "French",
            Self::Hi => "Hindi",
            Self::Pt => "Portuguese",
            Self::Ru => "Russian",
            Self::ZhCn => "Mandarin Chinese",
        }
    }

    /// ISO country code of the flag shown next to the language.
    pub const fn flag_code(self) -> &'static str {
        match self {
            Self::Ar => "eg",
            Self::Bn => "bd",
            Self::En => "gb",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::Hi => "in",
            Self::Pt => "pt",
            Self::Ru => "ru",
            Self::ZhCn => "cn",
        }
    }

    /// Message bundle for this locale.
    pub fn messages(self) -> &'static Messages {
        match self {
            Self::Ar => &AR,
            Self::Bn => &BN,
            Self::En => &EN,
            Self::Es => &ES,
            Self::Fr => &FR,
            Self::Hi => &HI,
            Self::Pt => &PT,
            Self::Ru => &RU,
            Self::ZhCn => &ZH_CN,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::ALL
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| FinderError::UnsupportedLocale(s.to_string()))
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}

/// User-facing strings for one locale.
#[derive(Debug)]
pub struct Messages {
    pub invalid_input: &'static str,
    pub unavailable: &'static str,
    pub fetch_failed: &'static str,
    pub copied: &'static str,
    pub redirecting: &'static str,
}

static AR: Messages = Messages {
    invalid_input: "تنسيق إدخال غير صالح. يرجى إدخال اسم حزمة صالح أو رابط متجر Google Play.",
    unavailable: "عذراً، التنزيل غير ممكن حالياً بسبب مشكلات مثل حزمة غير صالحة أو عدم التوافق أو كون التطبيق غير مجاني.",
    fetch_failed: "حدث خطأ أثناء جلب البيانات. يرجى المحاولة مرة أخرى.",
    copied: "تم نسخ اسم الحزمة إلى الحافظة",
    redirecting: "ستتم إعادة توجيهك إلى Nebhula APK لتنزيل التطبيق",
};

static BN: Messages = Messages {
    invalid_input: "অবৈধ ইনপুট ফরম্যাট। একটি বৈধ প্যাকেজ নাম বা Google Play Store URL লিখুন।",
    unavailable: "দুঃখিত, অবৈধ প্যাকেজ, অসামঞ্জস্যতা বা অ-বিনামূল্যে বিভাগের কারণে এই মুহূর্তে ডাউনলোড সম্ভব নয়।",
    fetch_failed: "ডেটা আনতে সমস্যা হয়েছে। আবার চেষ্টা করুন।",
    copied: "প্যাকেজের নাম ক্লিপবোর্ডে কপি করা হয়েছে",
    redirecting: "অ্যাপটি ডাউনলোড করতে আপনাকে Nebhula APK-তে পাঠানো হবে",
};

static EN: Messages = Messages {
    invalid_input: "Invalid input format. Please enter a valid package name or Google Play Store URL.",
    unavailable: "Oops, downloading isn't possible at the moment due to issues such as an invalid package, non-compatibility, or being in the non-free category.",
    fetch_failed: "Error fetching data. Please try again.",
    copied: "Package name copied to clipboard",
    redirecting: "You will be redirected to Nebhula APK to download the app",
};

static ES: Messages = Messages {
    invalid_input: "Formato de entrada no válido. Introduce un nombre de paquete válido o una URL de Google Play Store.",
    unavailable: "Vaya, la descarga no es posible en este momento por problemas como un paquete no válido, incompatibilidad o pertenecer a la categoría de pago.",
    fetch_failed: "Error al obtener los datos. Inténtalo de nuevo.",
    copied: "Nombre del paquete copiado al portapapeles",
    redirecting: "Serás redirigido a Nebhula APK donde podrás descargar la aplicación",
};

static FR: Messages = Messages {
    invalid_input: "Format de saisie invalide. Veuillez saisir un nom de paquet valide ou une URL du Google Play Store.",
    unavailable: "Oups, le téléchargement est impossible pour le moment : paquet invalide, incompatibilité ou application payante.",
    fetch_failed: "Erreur lors de la récupération des données. Veuillez réessayer.",
    copied: "Nom du paquet copié dans le presse-papiers",
    redirecting: "Vous allez être redirigé vers Nebhula APK pour télécharger l'application",
};

static HI: Messages = Messages {
    invalid_input: "अमान्य इनपुट प्रारूप। कृपया एक मान्य पैकेज नाम या Google Play Store URL दर्ज करें।",
    unavailable: "क्षमा करें, अमान्य पैकेज, असंगतता या सशुल्क श्रेणी जैसी समस्याओं के कारण अभी डाउनलोड संभव नहीं है।",
    fetch_failed: "डेटा लाने में त्रुटि। कृपया पुनः प्रयास करें।",
    copied: "पैकेज नाम क्लिपबोर्ड पर कॉपी किया गया",
    redirecting: "ऐप डाउनलोड करने के लिए आपको Nebhula APK पर भेजा जाएगा",
};

static PT: Messages = Messages {
    invalid_input: "Formato de entrada inválido. Insira um nome de pacote válido ou um URL da Google Play Store.",
    unavailable: "Ops, o download não é possível no momento devido a problemas como pacote inválido, incompatibilidade ou por ser pago.",
    fetch_failed: "Erro ao obter os dados. Tente novamente.",
    copied: "Nome do pacote copiado para a área de transferência",
    redirecting: "Você será redirecionado para o Nebhula APK para baixar o aplicativo",
};

static RU: Messages = Messages {
    invalid_input: "Неверный формат ввода. Введите корректное имя пакета или ссылку Google Play Store.",
    unavailable: "Увы, скачивание сейчас невозможно: неверный пакет, несовместимость или платное приложение.",
    fetch_failed: "Ошибка при получении данных. Попробуйте ещё раз.",
    copied: "Имя пакета скопировано в буфер обмена",
    redirecting: "Вы будете перенаправлены на Nebhula APK для загрузки приложения",
};

static ZH_CN: Messages = Messages {
    invalid_input: "输入格式无效。请输入有效的包名或 Google Play 商店链接。",
    unavailable: "抱歉，由于包无效、不兼容或属于付费类别等问题，目前无法下载。",
    fetch_failed: "获取数据时出错。请重试。",
    copied: "包名已复制到剪贴板",
    redirecting: "您将被重定向到 Nebhula APK 下载该应用",
};
