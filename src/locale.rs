//! UI context: locale and text direction.
//!
//! There is no global "current language". Every renderer receives a
//! [`UiContext`] and reads its strings through [`UiContext::text`]. Switching
//! language means building a new context and rendering again.
//!
//! Only the chrome of the site is translated (titles, navigation, calls to
//! action). Catalog entries and itinerary content are authored in English.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Locale::En => Direction::Ltr,
            Locale::Ar => Direction::Rtl,
        }
    }

    /// Path prefix for this locale's pages in the generated site.
    ///
    /// English lives at the site root, Arabic under `/ar/`.
    pub fn path_prefix(self) -> &'static str {
        match self {
            Locale::En => "",
            Locale::Ar => "ar/",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "ar" => Ok(Locale::Ar),
            other => Err(format!("unsupported locale '{other}' (expected en or ar)")),
        }
    }
}

/// Keys for the translated UI strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    AppTitle,
    AppSubtitle,
    NavHome,
    NavHeritage,
    NavDates,
    NavWellness,
    NavCulture,
    CtaNext,
    CtaBack,
    CtaHome,
    CtaPlan,
    CardHeritage,
    CardTradition,
    CardWellness,
    CardCulture,
}

/// Rendering context threaded through every page renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub locale: Locale,
    pub direction: Direction,
}

impl UiContext {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            direction: locale.direction(),
        }
    }

    pub fn is_rtl(&self) -> bool {
        self.direction == Direction::Rtl
    }

    /// Absolute path of a page within this locale, e.g. `/ar/heritage/`.
    pub fn href(&self, page: &str) -> String {
        format!("/{}{}", self.locale.path_prefix(), page)
    }

    pub fn text(&self, key: TextKey) -> &'static str {
        match self.locale {
            Locale::En => english(key),
            Locale::Ar => arabic(key),
        }
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new(Locale::En)
    }
}

fn english(key: TextKey) -> &'static str {
    match key {
        TextKey::AppTitle => "Welcome to Oman",
        TextKey::AppSubtitle => {
            "Explore Oman's rich heritage and culture through an interactive journey"
        }
        TextKey::NavHome => "Home",
        TextKey::NavHeritage => "Heritage of Oman",
        TextKey::NavDates => "Tradition",
        TextKey::NavWellness => "Wellness",
        TextKey::NavCulture => "Culture",
        TextKey::CtaNext => "Start Exploring",
        TextKey::CtaBack => "Back",
        TextKey::CtaHome => "Home",
        TextKey::CtaPlan => "Plan your journey",
        TextKey::CardHeritage => {
            "Discover the magnificent ancient forts, castles, and historical monuments that tell the story of Oman's rich past"
        }
        TextKey::CardTradition => {
            "Explore the time-honored traditional crafts, customs, and cultural practices preserved through generations"
        }
        TextKey::CardWellness => {
            "Experience the healing power of natural hot springs, therapeutic treatments, and serene relaxation"
        }
        TextKey::CardCulture => {
            "Dive deep into the vibrant arts, music, literature, and cultural traditions of Oman"
        }
    }
}

fn arabic(key: TextKey) -> &'static str {
    match key {
        TextKey::AppTitle => "مرحباً بكم في عُمان",
        TextKey::AppSubtitle => "استكشفوا تراث وثقافة عُمان الغنية من خلال رحلة تفاعلية",
        TextKey::NavHome => "الرئيسية",
        TextKey::NavHeritage => "تراث عُمان",
        TextKey::NavDates => "التقاليد",
        TextKey::NavWellness => "العافية",
        TextKey::NavCulture => "الثقافة",
        TextKey::CtaNext => "ابدأ الاستكشاف",
        TextKey::CtaBack => "السابق",
        TextKey::CtaHome => "الصفحة الرئيسية",
        TextKey::CtaPlan => "خطط رحلتك",
        TextKey::CardHeritage => {
            "اكتشفوا القلاع العظيمة والحصون والآثار التاريخية التي تحكي قصة الماضي العريق لعُمان"
        }
        TextKey::CardTradition => {
            "استكشفوا الحرف التقليدية الأصيلة والعادات والممارسات الثقافية المحفوظة عبر الأجيال"
        }
        TextKey::CardWellness => {
            "اختبروا قوة الشفاء الطبيعية من الينابيع الحارة والعلاجات العلاجية والاسترخاء الهادئ"
        }
        TextKey::CardCulture => {
            "اغمروا أنفسكم في الفنون النابضة بالحياة والموسيقى والأدب والتقاليد الثقافية"
        }
    }
}
