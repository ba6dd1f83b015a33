//! Canonical skin concerns and the trigger phrases that detect them.
//!
//! Declaration order is significant: detected concerns are reported in this order.

pub static CONCERN_KEYWORDS: &[(&str, &[&str])] = &[
    ("acne", &["acne", "pimple", "breakout", "spot", "blemish", "congestion"]),
    ("oily skin", &["oily", "oil", "grease", "shiny", "shine", "sebum"]),
    ("dry skin", &["dry", "dehydrated", "flaky", "peeling", "tight"]),
    ("hyperpigmentation", &["hyperpigmentation", "dark spot", "dark spots", "pigmentation", "uneven tone", "pigment"]),
    ("blackheads", &["blackhead", "comedone", "pore", "congested"]),
    ("wrinkles", &["wrinkle", "line", "aging", "fine line", "anti-aging", "mature"]),
    ("dull skin", &["dull", "matte", "tired", "radiance", "glow", "lackluster"]),
    ("dark spots", &["dark spot", "spots", "sun spot", "age spot", "freckle"]),
    ("enlarged pores", &["pore", "large pore", "wide pore", "dilated pore"]),
    ("sensitivity", &["sensitive", "sensitivity", "reactive", "irritated", "irritation"]),
    ("redness", &["red", "redness", "flush", "inflamed", "inflammation"]),
    ("bumpy skin", &["bumpy", "texture", "rough", "uneven texture", "keratosis"]),
    ("textured skin", &["texture", "textured", "bumpy", "rough patches"]),
    ("rosacea", &["rosacea", "persistent redness", "vascular"]),
    ("cystic acne", &["cystic", "cyst", "nodule", "deep acne"]),
    ("under-eye circles", &["under-eye circle", "dark circles", "eye puffiness", "eye bags"]),
    ("puffy eyes", &["puffy eye", "eye puffiness", "eye bag", "eye swelling"]),
    ("uneven texture", &["uneven texture", "rough skin", "textured skin"]),
    ("sun damage", &["sun damage", "photoaging", "UV damage"]),
    ("age spots", &["age spot", "sun spot", "liver spot"]),
    ("melasma", &["melasma", "mask of pregnancy", "chloasma"]),
    ("back acne", &["back acne", "acne on back", "bacne"]),
    ("body acne", &["body acne", "acne on body", "troubled skin"]),
    ("razor bumps", &["razor bump", "pseudofolliculitis barbae", "ingrown hair"]),
    ("flaky skin", &["flaky skin", "scaling skin", "dry flaky skin"]),
    ("peeling skin", &["peeling skin", "exfoliating skin", "flaking skin"]),
    ("makeup irritation", &["makeup irritation", "makeup allergy", "makeup sensitivity"]),
    ("damaged skin barrier", &["damaged skin barrier", "barrier damage", "skin barrier issues"]),
    ("large pores", &["large pores", "wide pores", "enlarged pores"]),
    ("clogged pores", &["clogged pores", "blocked pores", "congested pores"]),
    ("stress acne", &["stress acne", "stress-related acne", "stress-induced acne"]),
    ("hormonal acne", &["hormonal acne", "hormonal breakouts", "hormonal skin issues"]),
    ("whiteheads", &["whitehead", "closed comedone", "milium"]),
    ("blotchiness", &["blotchiness", "skin discoloration", "uneven skin tone"]),
    ("rough patches", &["rough patch", "rough skin", "uneven texture"]),
    ("itchy skin", &["itchy skin", "itching skin", "irritated skin"]),
    ("psoriasis", &["psoriasis", "psoriasis treatment", "psoriasis skincare"]),
    ("seborrheic dermatitis", &["seborrheic dermatitis", "scalp acne", "scalp irritation"]),
    ("pollution damage", &["pollution damage", "city skin", "urban skin"]),
    ("tanning damage", &["tanning damage", "sunburn", "tan lines"]),
    ("inflamed acne", &["inflamed acne", "red acne", "inflammatory acne"]),
    ("deep acne", &["deep acne", "nodular acne", "cystic acne"]),
    ("inflammatory acne", &["inflammatory acne", "red acne", "papules"]),
    ("breakouts", &["breakout", "acne breakout", "skin breakout"]),
    ("combination skin", &["combination skin", "mixed skin", "oily and dry skin"]),
    ("dehydrated skin", &["dehydrated skin", "dry skin", "water-starved skin"]),
    ("mature skin", &["mature skin", "aging skin", "senior skin"]),
    ("oily t-zone", &["oily t-zone", "t-zone shine", "t-zone congestion"]),
];
