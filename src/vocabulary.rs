//! Static word lists and sentence templates the generator samples from

/// Descriptive terms drawn at random into the keyword list
pub const KEYWORD_POOL: [&str; 8] = [
    "পেশাদার",
    "উচ্চ মানের",
    "স্টক",
    "ডিজিটাল",
    "সৃজনশীল",
    "আধুনিক",
    "অনন্য",
    "আকর্ষণীয়",
];

/// Description sentences. Each placeholder occurs at most once per template.
pub const DESCRIPTION_TEMPLATES: [&str; 3] = [
    "এই {type} হল {platform} এর জন্য অপ্টিমাইজ করা একটি পেশাদার {quality} মানের আইটেম।",
    "{type} যা সমস্ত স্টক ফটো প্ল্যাটফর্মের জন্য উপযুক্ত এবং সার্চ ইঞ্জিনের জন্য সম্পূর্ণভাবে অপ্টিমাইজ করা।",
    "এটি একটি {quality} {type} যা {platform} এ বিক্রয় বৃদ্ধির জন্য ডিজাইন করা হয়েছে।",
];

pub const TYPE_PLACEHOLDER: &str = "{type}";
pub const PLATFORM_PLACEHOLDER: &str = "{platform}";
pub const QUALITY_PLACEHOLDER: &str = "{quality}";

/// Fixed quality phrase used in titles and descriptions
pub const QUALITY_LABEL: &str = "পেশাদার মানের";

/// Used when `imageType` is empty
pub const DEFAULT_TYPE: &str = "ছবি";

/// Used when `platform` is empty
pub const DEFAULT_PLATFORM: &str = "সব প্ল্যাটফর্ম";

/// Marketing terms appended after the type and platform keywords
pub const MARKETING_KEYWORDS: [&str; 5] = [
    "stock",
    "image",
    "creative",
    "professional",
    "high-quality",
];

/// Maximum number of comma separated extra keywords taken from settings
pub const MAX_EXTRA_KEYWORDS: usize = 3;
