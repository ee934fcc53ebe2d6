//! Names, digits and markers used when rendering templates.

/// Text tables for one rendering language.
///
/// Weekday tables start at Saturday, month tables at Farvardin.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Locale {
    pub weekday_names: [&'static str; 7],
    pub weekday_abbrs: [&'static str; 7],
    pub month_names: [&'static str; 12],
    pub month_abbrs: [&'static str; 12],
    /// Ordinal names of the days of a month, from the 1st to the 31st.
    pub day_ordinals: [&'static str; 31],
    /// Replacements for the ASCII digits `0` to `9` in decorated output.
    pub digits: [char; 10],
    /// Before noon and after noon markers for `a`.
    pub meridiem_lower: [&'static str; 2],
    /// Before noon and after noon markers for `A`.
    pub meridiem_upper: [&'static str; 2],
    /// Separator after the weekday in `r`.
    pub list_separator: &'static str,
}

impl Locale {
    pub const PERSIAN: Locale = Locale {
        weekday_names: [
            "شنبه",
            "یکشنبه",
            "دوشنبه",
            "سه شنبه",
            "چهارشنبه",
            "پنج شنبه",
            "آدینه",
        ],
        weekday_abbrs: ["ش", "ی", "د", "س", "چ", "پ", "آ"],
        month_names: [
            "فروردین",
            "اردیبهشت",
            "خرداد",
            "تیر",
            "امرداد",
            "شهریور",
            "مهر",
            "آبان",
            "آذر",
            "دی",
            "بهمن",
            "اسفند",
        ],
        month_abbrs: [
            "فرو", "ارد", "خرد", "تیر", "امر", "شهر", "مهر", "آبا", "آذر", "دی", "بهم", "اسف",
        ],
        day_ordinals: [
            "یکم",
            "دوم",
            "سوم",
            "چهارم",
            "پنجم",
            "ششم",
            "هفتم",
            "هشتم",
            "نهم",
            "دهم",
            "یازدهم",
            "دوازدهم",
            "سیزدهم",
            "چهاردهم",
            "پانزدهم",
            "شانزدهم",
            "هفدهم",
            "هجدهم",
            "نوزدهم",
            "بیستم",
            "بیست و یکم",
            "بیست و دوم",
            "بیست و سوم",
            "بیست و چهارم",
            "بیست و پنجم",
            "بیست و ششم",
            "بیست و هفتم",
            "بیست و هشتم",
            "بیست و نهم",
            "سی ام",
            "سی و یکم",
        ],
        digits: ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'],
        meridiem_lower: ["ق.ظ", "ب.ظ"],
        meridiem_upper: ["ق.ظ", "ب.ظ"],
        list_separator: "، ",
    };

    pub const TRANSLITERATED: Locale = Locale {
        weekday_names: [
            "Shanbe",
            "Yekshanbe",
            "Doshanbe",
            "Seshanbe",
            "Chaharshanbe",
            "Panjshanbe",
            "Adine",
        ],
        weekday_abbrs: ["Sha", "Yek", "Dos", "Ses", "Cha", "Pan", "Adi"],
        month_names: [
            "Farvardin",
            "Ordibehesht",
            "Khordad",
            "Tir",
            "Amordad",
            "Shahrivar",
            "Mehr",
            "Aban",
            "Azar",
            "Dey",
            "Bahman",
            "Esfand",
        ],
        month_abbrs: [
            "Far", "Ord", "Kho", "Tir", "Amo", "Sha", "Meh", "Aba", "Aza", "Dey", "Bah", "Esf",
        ],
        day_ordinals: [
            "yekom",
            "dovom",
            "sevom",
            "chaharom",
            "panjom",
            "sheshom",
            "haftom",
            "hashtom",
            "nohom",
            "dahom",
            "yazdahom",
            "davazdahom",
            "sizdahom",
            "chahardahom",
            "panzdahom",
            "shanzdahom",
            "hefdahom",
            "hejdahom",
            "nuzdahom",
            "bistom",
            "bist-o-yekom",
            "bist-o-dovom",
            "bist-o-sevom",
            "bist-o-chaharom",
            "bist-o-panjom",
            "bist-o-sheshom",
            "bist-o-haftom",
            "bist-o-hashtom",
            "bist-o-nohom",
            "siom",
            "si-o-yekom",
        ],
        digits: ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'],
        meridiem_lower: ["am", "pm"],
        meridiem_upper: ["AM", "PM"],
        list_separator: ", ",
    };

    /// Name of the weekday, 0 being Saturday.
    #[inline]
    pub fn weekday_name(&self, weekday: u32) -> &'static str {
        self.weekday_names[weekday as usize % 7]
    }

    #[inline]
    pub fn weekday_abbr(&self, weekday: u32) -> &'static str {
        self.weekday_abbrs[weekday as usize % 7]
    }

    /// Name of the month, 1 being Farvardin.
    #[inline]
    pub fn month_name(&self, month: u32) -> &'static str {
        self.month_names[(month as usize + 11) % 12]
    }

    #[inline]
    pub fn month_abbr(&self, month: u32) -> &'static str {
        self.month_abbrs[(month as usize + 11) % 12]
    }

    #[inline]
    pub fn day_ordinal(&self, day: u32) -> &'static str {
        self.day_ordinals[(day as usize + 30) % 31]
    }

    /// Replaces an ASCII digit with the locale's digit; other characters pass through.
    #[inline]
    pub fn decorate_char(&self, ch: char) -> char {
        match ch {
            '0'..='9' => self.digits[ch as usize - '0' as usize],
            _ => ch,
        }
    }

    #[inline]
    pub fn meridiem(&self, hour: u32, upper: bool) -> &'static str {
        let markers = if upper {
            &self.meridiem_upper
        } else {
            &self.meridiem_lower
        };
        match hour {
            0..=11 => markers[0],
            _ => markers[1],
        }
    }
}

impl Default for Locale {
    #[inline]
    fn default() -> Self {
        Locale::PERSIAN
    }
}
