//! Immunity tip reference table
//!
//! Static bilingual records bundled at build time, plus the pure selection
//! that turns the current season into a priority/general split. Icon names
//! refer to the Material Community icon set the client renders with.

use crate::geo::Season;
use crate::lang::Lang;
use serde::Serialize;

/// Tags a tip can carry. A tip tagged only `Basic` is year-round advice;
/// season tags make it a priority during that season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TipTag {
    Cool,
    Hot,
    Monsoon,
    Basic,
    Prevention,
}

impl TipTag {
    fn matches(self, season: Season) -> bool {
        matches!(
            (self, season),
            (TipTag::Cool, Season::Cool)
                | (TipTag::Hot, Season::Hot)
                | (TipTag::Monsoon, Season::Monsoon)
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TipContent {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug)]
pub struct ImmunityTip {
    pub id: u32,
    pub tags: &'static [TipTag],
    pub icon: &'static str,
    pub icon_color: &'static str,
    pub en: TipContent,
    pub my: TipContent,
}

impl ImmunityTip {
    pub fn content(&self, lang: Lang) -> &TipContent {
        match lang {
            Lang::En => &self.en,
            Lang::My => &self.my,
        }
    }

    fn is_general(&self) -> bool {
        self.tags.len() == 1 && self.tags[0] == TipTag::Basic
    }
}

/// Seasonal header shown above the tip list.
#[derive(Debug, Clone, Copy)]
pub struct SeasonHeader {
    pub en: &'static str,
    pub my: &'static str,
}

impl SeasonHeader {
    pub fn text(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::En => self.en,
            Lang::My => self.my,
        }
    }
}

const HEADER_COOL: SeasonHeader = SeasonHeader {
    en: "❄️ Cool Season Immune Defense: Focus on Flu & Cold Prevention",
    my: "❄️ အေးသောရာသီ ကိုယ်ခံအား ကာကွယ်ရေး- တုပ်ကွေးနှင့် အအေးမိခြင်း ကာကွယ်ရန် အသားပေးပါ။",
};

const HEADER_HOT: SeasonHeader = SeasonHeader {
    en: "🔥 Hot Season Immunity: Focus on Hydration & Minerals",
    my: "🔥 ပူသောရာသီ ကိုယ်ခံအား- ရေဓာတ်နှင့် သတ္တုဓာတ်များ ဖြည့်တင်းရန် အသားပေးပါ။",
};

const HEADER_MONSOON: SeasonHeader = SeasonHeader {
    en: "🌧️ Monsoon Season Immunity: Focus on Hygiene & Gut Health",
    my: "🌧️ မုတ်သုန်ရာသီ ကိုယ်ခံအား- သန့်ရှင်းရေးနှင့် အူလမ်းကြောင်း ကျန်းမာရေးကို အသားပေးပါ။",
};

/// Year-round header, used when no season emphasis applies.
pub const HEADER_BASIC: SeasonHeader = SeasonHeader {
    en: "Essential Immune Boosters (Year-Round)",
    my: "မရှိမဖြစ် ကိုယ်ခံအား မြှင့်တင်ရေး (တစ်နှစ်ပတ်လုံး)",
};

pub fn season_header(season: Season) -> SeasonHeader {
    match season {
        Season::Cool => HEADER_COOL,
        Season::Hot => HEADER_HOT,
        Season::Monsoon => HEADER_MONSOON,
    }
}

pub const ALL_IMMUNITY_TIPS: &[ImmunityTip] = &[
    // Cool / dry season (Nov - Feb)
    ImmunityTip {
        id: 1,
        tags: &[TipTag::Cool, TipTag::Basic],
        icon: "weather-sunny",
        icon_color: "#FFD700",
        en: TipContent {
            title: "Vitamin D Boost",
            description: "Sunlight is limited during cooler months. Supplementation is key to regulating immune response and fighting seasonal bugs.",
        },
        my: TipContent {
            title: "ဗီတာမင် D အားဖြည့်ခြင်း",
            description: "အေးတဲ့လတွေမှာ နေရောင်ခြည်ရရှိမှုနည်းပါတယ်။ ကိုယ်ခံအားကို ထိန်းညှိဖို့နဲ့ ရာသီတုပ်ကွေးကို တိုက်ဖျက်ဖို့ ဖြည့်စွက်စာသောက်သုံးတာဟာ အဓိကကျပါတယ်။",
        },
    },
    ImmunityTip {
        id: 2,
        tags: &[TipTag::Cool, TipTag::Prevention],
        icon: "plus-circle",
        icon_color: "red",
        en: TipContent {
            title: "Stay Vaccinated",
            description: "Ensure you are current with your seasonal flu shots and any other recommended boosters before peak illness season.",
        },
        my: TipContent {
            title: "ကာကွယ်ဆေး ထိုးထားပါ",
            description: "ရောဂါအဖြစ်များတဲ့ရာသီမတိုင်ခင် ရာသီတုပ်ကွေးကာကွယ်ဆေးနဲ့ အခြားလိုအပ်တဲ့ ကာကွယ်ဆေးများကို ထိုးထားကြောင်း သေချာပါစေ။",
        },
    },
    // General / year-round
    ImmunityTip {
        id: 3,
        tags: &[TipTag::Basic],
        icon: "fruit-citrus",
        icon_color: "#FF8C00",
        en: TipContent {
            title: "Vitamin C Intake",
            description: "Essential for immune cell function. Increase intake of citrus, bell peppers, and kiwi.",
        },
        my: TipContent {
            title: "ဗီတာမင် C စားသုံးခြင်း",
            description: "ကိုယ်ခံအားဆဲလ်လုပ်ဆောင်ချက်အတွက် မရှိမဖြစ်လိုအပ်သည်။ သံပရာ၊ ငရုတ်သီး၊ ကီဝီသီးတို့ကို ပိုမိုစားသုံးပါ။",
        },
    },
    ImmunityTip {
        id: 4,
        tags: &[TipTag::Basic],
        icon: "seed",
        icon_color: "#4CAF50",
        en: TipContent {
            title: "Zinc for Defense",
            description: "Critical for immune cell development. Use a supplement or eat pumpkin seeds and legumes.",
        },
        my: TipContent {
            title: "ခုခံအားအတွက် ဇင့် (Zinc)",
            description: "ကိုယ်ခံအားဆဲလ်များ ဖွံ့ဖြိုးတိုးတက်ရန် အရေးကြီးသည်။ ဖြည့်စွက်စာသောက်သုံးပါ သို့မဟုတ် ဖရုံစေ့နှင့် ပဲအမျိုးမျိုးကို စားသုံးပါ။",
        },
    },
    ImmunityTip {
        id: 5,
        tags: &[TipTag::Basic],
        icon: "sleep",
        icon_color: "#1E90FF",
        en: TipContent {
            title: "Prioritize Sleep",
            description: "Aim for 7-9 hours nightly. Sleep is when your body produces infection-fighting proteins (cytokines).",
        },
        my: TipContent {
            title: "အိပ်စက်ခြင်းကို ဦးစားပေးပါ",
            description: "ညဘက်တွင် ၇-၉ နာရီ ရအောင်အိပ်ပါ။ အိပ်စက်ခြင်းသည် ခန္ဓာကိုယ်မှ ရောဂါတိုက်ဖျက်သည့် ပရိုတင်း (Cytokines) များကို ထုတ်လုပ်သည့်အချိန်ဖြစ်သည်။",
        },
    },
    ImmunityTip {
        id: 6,
        tags: &[TipTag::Basic],
        icon: "meditation",
        icon_color: "#FF69B4",
        en: TipContent {
            title: "Manage Stress",
            description: "Practice daily mindfulness or deep breathing. High stress levels suppress immunity.",
        },
        my: TipContent {
            title: "စိတ်ဖိစီးမှု ထိန်းချုပ်ပါ",
            description: "နေ့စဉ် သတိပဋ္ဌာန် သို့မဟုတ် အသက်ပြင်းပြင်းရှူခြင်းတို့ကို ကျင့်ပါ။ စိတ်ဖိစီးမှုများခြင်းသည် ကိုယ်ခံအားကို ကျဆင်းစေသည်။",
        },
    },
    ImmunityTip {
        id: 7,
        tags: &[TipTag::Basic],
        icon: "walk",
        icon_color: "#228B22",
        en: TipContent {
            title: "Regular Exercise",
            description: "30 minutes of moderate activity improves circulation of immune cells.",
        },
        my: TipContent {
            title: "ပုံမှန် လေ့ကျင့်ခန်း",
            description: "အလယ်အလတ် လှုပ်ရှားမှု မိနစ် ၃၀ သည် ကိုယ်ခံအားဆဲလ်များ လည်ပတ်မှုကို တိုးတက်စေသည်။",
        },
    },
    ImmunityTip {
        id: 8,
        tags: &[TipTag::Basic, TipTag::Prevention],
        icon: "hand-wash",
        icon_color: "#3CB371",
        en: TipContent {
            title: "Hygiene Protocol",
            description: "Wash hands frequently for 20 seconds, especially after being in public places.",
        },
        my: TipContent {
            title: "သန့်ရှင်းရေးစည်းမျဉ်း",
            description: "အများပြည်သူနေရာများမှ ပြန်လာပါက လက်ကို စက္ကန့် ၂၀ ကြာ မကြာခဏ ဆေးကြောပါ။",
        },
    },
    // Hot / dry season (Mar - May)
    ImmunityTip {
        id: 9,
        tags: &[TipTag::Hot],
        icon: "water",
        icon_color: "#00BFFF",
        en: TipContent {
            title: "Hydration Focus",
            description: "Drink 2-3 liters of water/electrolytes daily to prevent heat stress and support toxin flushing.",
        },
        my: TipContent {
            title: "ရေဓာတ်ကို အာရုံစိုက်ပါ",
            description: "အပူဒဏ်ကြောင့် ဖိစီးမှုမဖြစ်စေရန်နှင့် အဆိပ်အတောက်များကို ဖယ်ရှားရန်အတွက် ရေ/ဓာတ်ဆားရည် ၂-၃ လီတာကို နေ့စဉ်သောက်ပါ။",
        },
    },
    ImmunityTip {
        id: 10,
        tags: &[TipTag::Hot],
        icon: "white-balance-sunny",
        icon_color: "#FFA07A",
        en: TipContent {
            title: "Sun Safety",
            description: "Avoid direct midday sun and use protective clothing to preserve skin barrier integrity.",
        },
        my: TipContent {
            title: "နေရောင်ခြည် ဘေးကင်းရေး",
            description: "အသားအရေကို ကာကွယ်ရန်အတွက် နေ့လယ်နေရောင်ခြည်ကို ရှောင်ရှားပြီး အကာအကွယ်အဝတ်အစားများကို ဝတ်ဆင်ပါ။",
        },
    },
    // Monsoon / wet season (Jun - Oct)
    ImmunityTip {
        id: 11,
        tags: &[TipTag::Monsoon],
        icon: "food-turkey",
        icon_color: "#8B4513",
        en: TipContent {
            title: "Gut Health Check",
            description: "Be cautious about water and food safety. Increase probiotics (yogurt, kefir) to guard against waterborne issues.",
        },
        my: TipContent {
            title: "အူကျန်းမာရေး စစ်ဆေးခြင်း",
            description: "ရေနှင့် အစားအစာ ဘေးကင်းရေးကို သတိပြုပါ။ ရေမှတစ်ဆင့် ဖြစ်ပွားသော ရောဂါများမှ ကာကွယ်ရန် ပရိုဘိုင်အိုတစ် (ဒိန်ချဉ်၊ Kefir) ကို တိုးမြှင့်စားသုံးပါ။",
        },
    },
    ImmunityTip {
        id: 12,
        tags: &[TipTag::Monsoon],
        icon: "bug-outline",
        icon_color: "#800080",
        en: TipContent {
            title: "Dengue Awareness",
            description: "Use mosquito repellent and clear standing water to prevent mosquito-borne diseases.",
        },
        my: TipContent {
            title: "သွေးလွန်တုပ်ကွေး သတိထားပါ",
            description: "ခြင်မှတစ်ဆင့် ကူးစက်သော ရောဂါများမှ ကာကွယ်ရန် ခြင်ဆေးဖျန်းခြင်းနှင့် ရေဝပ်သောနေရာများကို ရှင်းလင်းပါ။",
        },
    },
];

/// The tip selection for one season: a header plus the priority/general
/// split the immunity screen renders.
#[derive(Debug)]
pub struct SeasonalTips {
    pub header: SeasonHeader,
    pub priority: Vec<&'static ImmunityTip>,
    pub general: Vec<&'static ImmunityTip>,
}

/// Partition the tip table for a season. A tip is included when it carries
/// the season tag or the `Basic` tag; tips tagged exactly `[Basic]` form
/// the general bucket, everything else included is a priority.
pub fn seasonal_tips(season: Season) -> SeasonalTips {
    let mut priority = Vec::new();
    let mut general = Vec::new();
    for tip in ALL_IMMUNITY_TIPS {
        let included = tip
            .tags
            .iter()
            .any(|tag| tag.matches(season) || *tag == TipTag::Basic);
        if !included {
            continue;
        }
        if tip.is_general() {
            general.push(tip);
        } else {
            priority.push(tip);
        }
    }
    SeasonalTips {
        header: season_header(season),
        priority,
        general,
    }
}
