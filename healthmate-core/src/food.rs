//! Food group and incompatible-pair reference tables
//!
//! Static bilingual nutrition content: the three classic food groups, one
//! seasonal advice record, and the traditional incompatible-pair warnings.

use crate::lang::Lang;

#[derive(Debug, Clone, Copy)]
pub struct FoodGroupContent {
    pub name: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
}

#[derive(Debug)]
pub struct FoodGroup {
    pub id: &'static str,
    pub icon: &'static str,
    pub icon_color: &'static str,
    pub en: FoodGroupContent,
    pub my: FoodGroupContent,
}

impl FoodGroup {
    pub fn content(&self, lang: Lang) -> &FoodGroupContent {
        match lang {
            Lang::En => &self.en,
            Lang::My => &self.my,
        }
    }
}

pub const THREE_FOOD_GROUPS: &[FoodGroup] = &[
    FoodGroup {
        id: "1",
        icon: "fire",
        icon_color: "#FF6347",
        en: FoodGroupContent {
            name: "Energy-Giving Foods (Carbohydrates)",
            description: "These foods provide the primary fuel (calories) needed for the body to perform daily activities, from breathing to exercising.",
            examples: &["Rice", "Bread", "Potatoes", "Pasta", "Oats", "Sugars"],
        },
        my: FoodGroupContent {
            name: "စွမ်းအင်ပေး အစားအစာများ (ကာဗိုဟိုက်ဒရိတ်)",
            description: "ဤအစားအစာများသည် အသက်ရှူခြင်းမှ လေ့ကျင့်ခန်းလုပ်ခြင်းအထိ နေ့စဉ်လုပ်ဆောင်မှုများအတွက် လိုအပ်သော အဓိက လောင်စာ (ကယ်လိုရီ) ကို ပေးစွမ်းသည်။",
            examples: &["ထမင်း", "ပေါင်မုန့်", "အာလူး", "ခေါက်ဆွဲ", "ဂျုံ", "သကြားဓာတ်များ"],
        },
    },
    FoodGroup {
        id: "2",
        icon: "fish",
        icon_color: "#1E90FF",
        en: FoodGroupContent {
            name: "Body-Building Foods (Proteins)",
            description: "Proteins are essential for growth, maintenance, and repair of all body tissues, including muscles, organs, and the immune system.",
            examples: &["Meat", "Fish", "Eggs", "Milk", "Cheese", "Beans", "Lentils"],
        },
        my: FoodGroupContent {
            name: "ခန္ဓာကိုယ်တည်ဆောက်သော အစားအစာများ (ပရိုတင်း)",
            description: "ပရိုတင်းများသည် ကြွက်သားများ၊ ကိုယ်တွင်းအင်္ဂါများနှင့် ကိုယ်ခံအားစနစ် အပါအဝင် ခန္ဓာကိုယ်တစ်ရှူးအားလုံး ကြီးထွားရန်၊ ထိန်းသိမ်းရန်နှင့် ပြုပြင်ရန်အတွက် မရှိမဖြစ်လိုအပ်သည်။",
            examples: &["အသား", "ငါး", "ဥ", "နို့", "ဒိန်ခဲ", "ပဲအမျိုးမျိုး", "ပဲနီလေး"],
        },
    },
    FoodGroup {
        id: "3",
        icon: "basket-outline",
        icon_color: "#3CB371",
        en: FoodGroupContent {
            name: "Protective Foods (Vitamins & Minerals)",
            description: "These foods contain vitamins and minerals that keep the body healthy, regulate metabolism, and protect against diseases.",
            examples: &["Fruits", "Vegetables", "Berries", "Leafy Greens", "Citrus Fruits"],
        },
        my: FoodGroupContent {
            name: "ကာကွယ်မှုပေး အစားအစာများ (ဗီတာမင်နှင့် သတ္တုဓာတ်များ)",
            description: "ဤအစားအစာများတွင် ခန္ဓာကိုယ်ကို ကျန်းမာစေသော၊ ဇီဝကမ္မဖြစ်စဉ်ကို ထိန်းညှိပေးသော၊ ရောဂါများကို ကာကွယ်ပေးသော ဗီတာမင်နှင့် သတ္တုဓာတ်များ ပါဝင်သည်။",
            examples: &["သစ်သီးများ", "ဟင်းသီးဟင်းရွက်များ", "ဘယ်ရီသီးများ", "အရွက်စိမ်းများ", "အချဉ်ဓာတ်ပါသော သစ်သီးများ"],
        },
    },
];

/// Advice highlighting one group for the season.
#[derive(Debug)]
pub struct SeasonalAdvice {
    pub group_name: &'static str,
    pub icon: &'static str,
    pub en_tip: &'static str,
    pub my_tip: &'static str,
}

impl SeasonalAdvice {
    pub fn tip(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::En => self.en_tip,
            Lang::My => self.my_tip,
        }
    }
}

const SEASONAL_ADVICE: &[SeasonalAdvice] = &[SeasonalAdvice {
    group_name: "Protective Foods",
    icon: "star-circle",
    en_tip: "Focus on Vitamin C rich foods (citrus, peppers) and leafy greens to boost your immune system.",
    my_tip: "ကိုယ်ခံအားကို မြှင့်တင်ရန်အတွက် ဗီတာမင်စီ ကြွယ်ဝသော အစားအစာများ (သံပရာ၊ ငရုတ်သီး) နှင့် အရွက်စိမ်းများကို အာရုံစိုက်စားသုံးပါ။",
}];

pub fn seasonal_food_advice() -> &'static SeasonalAdvice {
    &SEASONAL_ADVICE[0]
}

#[derive(Debug, Clone, Copy)]
pub struct PairContent {
    pub pair: &'static str,
    pub example: &'static str,
    pub reason: &'static str,
}

/// A traditional food pairing warning.
#[derive(Debug)]
pub struct IncompatiblePair {
    pub id: u32,
    pub icon: &'static str,
    pub color: &'static str,
    pub en: PairContent,
    pub my: PairContent,
}

impl IncompatiblePair {
    pub fn content(&self, lang: Lang) -> &PairContent {
        match lang {
            Lang::En => &self.en,
            Lang::My => &self.my,
        }
    }
}

pub const INCOMPATIBLE_FOODS: &[IncompatiblePair] = &[
    IncompatiblePair {
        id: 1,
        icon: "fruit-pineapple",
        color: "#8B0000",
        en: PairContent {
            pair: "Durian & Alcohol",
            example: "Durian dessert followed by beer",
            reason: "Both generate strong internal heat; taken together they can cause bloating, flushing, and a racing heart.",
        },
        my: PairContent {
            pair: "ဒူးရင်းသီးနှင့် အရက်",
            example: "ဒူးရင်းသီးစားပြီးနောက် ဘီယာသောက်ခြင်း",
            reason: "နှစ်မျိုးစလုံးသည် ကိုယ်တွင်းအပူဓာတ်ကို မြင့်တက်စေပြီး အတူစားသုံးပါက ဗိုက်အောင့်ခြင်း၊ မျက်နှာနီရဲခြင်းနှင့် နှလုံးခုန်မြန်ခြင်းတို့ ဖြစ်စေနိုင်သည်။",
        },
    },
    IncompatiblePair {
        id: 2,
        icon: "cup",
        color: "#D9534F",
        en: PairContent {
            pair: "Milk & Sour Fruits",
            example: "A glass of milk right after oranges or pineapple",
            reason: "Fruit acid curdles the milk in the stomach and can trigger indigestion and cramps.",
        },
        my: PairContent {
            pair: "နို့နှင့် အချဉ်သီးများ",
            example: "လိမ္မော်သီး သို့မဟုတ် နာနတ်သီးစားပြီးချိန်တွင် နို့သောက်ခြင်း",
            reason: "သစ်သီးအချဉ်ဓာတ်သည် အစာအိမ်အတွင်း နို့ကို ခဲစေပြီး အစာမကြေခြင်းနှင့် ဗိုက်အောင့်ခြင်းတို့ ဖြစ်စေနိုင်သည်။",
        },
    },
    IncompatiblePair {
        id: 3,
        icon: "fish",
        color: "#1E90FF",
        en: PairContent {
            pair: "Shellfish & Ice-Cold Drinks",
            example: "Prawn curry washed down with iced water",
            reason: "Cold drinks are believed to harden the rich oils in shellfish, slowing digestion and upsetting the stomach.",
        },
        my: PairContent {
            pair: "ပုစွန်ကနုစွန်နှင့် ရေခဲအအေးများ",
            example: "ပုစွန်ဟင်းစားပြီး ရေခဲရေသောက်ခြင်း",
            reason: "အအေးသည် ပုစွန်ကနုစွန်ပါ အဆီများကို ခဲစေပြီး အစာခြေနှေးကာ ဗိုက်မအီမသာ ဖြစ်စေနိုင်သည်ဟု ယူဆကြသည်။",
        },
    },
    IncompatiblePair {
        id: 4,
        icon: "beehive-outline",
        color: "#FF8C00",
        en: PairContent {
            pair: "Honey & Boiling Water",
            example: "Stirring honey into freshly boiled tea",
            reason: "Tradition holds that fierce heat spoils honey's beneficial properties and turns it heavy on the stomach.",
        },
        my: PairContent {
            pair: "ပျားရည်နှင့် ရေနွေးဆူဆူ",
            example: "ကျိုချက်ပြီးစ လက်ဖက်ရည်ပူပူထဲ ပျားရည်ထည့်ဖျော်ခြင်း",
            reason: "အပူပြင်းပြင်းသည် ပျားရည်၏ အကျိုးပြုဂုဏ်သတ္တိများကို ပျက်စီးစေပြီး အစာအိမ်ကို လေးလံစေသည်ဟု ရိုးရာအယူအဆရှိသည်။",
        },
    },
    IncompatiblePair {
        id: 5,
        icon: "fruit-watermelon",
        color: "#228B22",
        en: PairContent {
            pair: "Watermelon & Plenty of Water",
            example: "Drinking several glasses of water straight after watermelon",
            reason: "Watermelon is already mostly water; flooding the stomach on top of it is said to dilute digestion and cause loose bowels.",
        },
        my: PairContent {
            pair: "ဖရဲသီးနှင့် ရေများများ",
            example: "ဖရဲသီးစားပြီးချက်ချင်း ရေခွက်အများအပြား သောက်ခြင်း",
            reason: "ဖရဲသီးတွင် ရေဓာတ်များစွာပါရှိပြီးဖြစ်၍ ထပ်မံရေများများသောက်ပါက အစာခြေမှုကို ပျော့စေပြီး ဝမ်းပျက်စေနိုင်သည်ဟု ဆိုကြသည်။",
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_groups_with_parallel_content() {
        assert_eq!(THREE_FOOD_GROUPS.len(), 3);
        for group in THREE_FOOD_GROUPS {
            assert_eq!(
                group.content(Lang::En).examples.len(),
                group.content(Lang::My).examples.len()
            );
            assert!(!group.content(Lang::My).name.is_empty());
        }
    }

    #[test]
    fn seasonal_advice_targets_protective_group() {
        let advice = seasonal_food_advice();
        assert!(THREE_FOOD_GROUPS
            .iter()
            .any(|g| g.en.name.starts_with(advice.group_name)));
        assert_ne!(advice.tip(Lang::En), advice.tip(Lang::My));
    }

    #[test]
    fn incompatible_pairs_are_bilingual_and_unique() {
        let mut ids = std::collections::HashSet::new();
        for pair in INCOMPATIBLE_FOODS {
            assert!(ids.insert(pair.id));
            assert!(!pair.content(Lang::En).reason.is_empty());
            assert!(!pair.content(Lang::My).reason.is_empty());
        }
    }
}
