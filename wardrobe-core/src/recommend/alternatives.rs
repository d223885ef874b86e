//! Curated outfit cards per temperature band, with rain/snow add-ons.
//!
//! Bands: below 0, 0–10, 10–20, 20–30, 30+. Every band carries two fixed
//! variants except the hottest, which has one. Values on a boundary belong
//! to the upper band (0 °C is "cold", not "very cold").

use crate::model::{ClothingItem, Condition};

use super::{ColorScheme, OutfitRecommendation, Style};

/// Curated outfit alternatives for the given temperature and condition.
/// Accepts any input; unknown conditions simply pick up no weather add-ons.
pub fn outfit_alternatives(
    temperature_c: f64,
    condition: &Condition,
) -> Vec<OutfitRecommendation> {
    let mut alternatives = if temperature_c < 0.0 {
        vec![winter_casual(), winter_formal()]
    } else if temperature_c < 10.0 {
        vec![cold_casual(), cold_sporty()]
    } else if temperature_c < 20.0 {
        vec![mild_casual(), mild_trendy()]
    } else if temperature_c < 30.0 {
        vec![warm_casual(), warm_beach()]
    } else {
        vec![hot_minimal()]
    };

    let condition = condition.as_str().to_lowercase();

    if condition.contains("rain") {
        for alt in &mut alternatives {
            alt.items.push(ClothingItem::new(
                "rain",
                "Rain Protection",
                "Stay dry in wet weather",
                &["Raincoat", "Waterproof jacket", "Poncho", "Umbrella"],
            ));
            alt.accessories.push(ClothingItem::new(
                "feet",
                "Waterproof Footwear",
                "Keep feet dry",
                &[
                    "Rain boots",
                    "Waterproof shoes",
                    "Galoshes",
                    "Water-resistant sneakers",
                ],
            ));
        }
    }

    if condition.contains("snow") {
        for alt in &mut alternatives {
            alt.accessories.push(ClothingItem::new(
                "traction",
                "Snow Gear",
                "Safety in snow",
                &["Snow boots", "Ice grips", "Thermal socks", "Waterproof gloves"],
            ));
        }
    }

    alternatives
}

fn winter_casual() -> OutfitRecommendation {
    OutfitRecommendation {
        id: "winter-casual".to_string(),
        name: "Winter Casual".to_string(),
        description: "Warm and comfortable for freezing temperatures".to_string(),
        items: vec![
            ClothingItem::new(
                "base",
                "Thermal Underwear",
                "Moisture-wicking base layer",
                &[
                    "Merino wool base layer",
                    "Synthetic thermal set",
                    "Cotton long underwear",
                ],
            ),
            ClothingItem::new(
                "top",
                "Heavy Sweater",
                "Thick knit for insulation",
                &["Wool pullover", "Fleece jacket", "Cashmere sweater", "Chunky cardigan"],
            ),
            ClothingItem::new(
                "outer",
                "Winter Parka",
                "Insulated and windproof",
                &["Down jacket", "Wool coat", "Puffer jacket", "Ski jacket"],
            ),
            ClothingItem::new(
                "bottom",
                "Insulated Pants",
                "Warm and comfortable",
                &[
                    "Thermal leggings + jeans",
                    "Wool pants",
                    "Fleece-lined pants",
                    "Snow pants",
                ],
            ),
            ClothingItem::new(
                "footwear",
                "Winter Boots",
                "Waterproof and insulated",
                &[
                    "Snow boots",
                    "Insulated hiking boots",
                    "Fur-lined boots",
                    "Thermal rain boots",
                ],
            ),
        ],
        accessories: vec![
            ClothingItem::new(
                "head",
                "Winter Hat",
                "Covers ears completely",
                &["Beanie", "Trapper hat", "Wool cap", "Fleece headband"],
            ),
            ClothingItem::new(
                "hands",
                "Insulated Gloves",
                "Waterproof and warm",
                &["Mittens", "Heated gloves", "Wool gloves", "Ski gloves"],
            ),
            ClothingItem::new(
                "neck",
                "Thick Scarf",
                "Covers neck and face",
                &["Neck warmer", "Balaclava", "Wool scarf", "Fleece neck gaiter"],
            ),
        ],
        colors: ColorScheme::new(
            &["Black", "Navy", "Charcoal", "Dark Brown"],
            &["Burgundy", "Forest Green", "Deep Purple", "Maroon"],
            &["Red", "Orange", "Bright Blue", "Yellow"],
        ),
        style: Style::Casual,
    }
}

fn winter_formal() -> OutfitRecommendation {
    OutfitRecommendation {
        id: "winter-formal".to_string(),
        name: "Winter Formal".to_string(),
        description: "Professional look for cold weather".to_string(),
        items: vec![
            ClothingItem::new(
                "base",
                "Dress Shirt",
                "Crisp and professional",
                &["Button-down shirt", "Turtleneck", "Blouse", "Polo shirt"],
            ),
            ClothingItem::new(
                "top",
                "Wool Blazer",
                "Structured and warm",
                &["Suit jacket", "Cardigan", "Vest", "Sweater blazer"],
            ),
            ClothingItem::new(
                "outer",
                "Wool Overcoat",
                "Classic and sophisticated",
                &["Trench coat", "Peacoat", "Cashmere coat", "Long wool coat"],
            ),
            ClothingItem::new(
                "bottom",
                "Dress Pants",
                "Tailored and warm",
                &["Wool trousers", "Dress slacks", "Thermal-lined pants", "Suit pants"],
            ),
            ClothingItem::new(
                "footwear",
                "Leather Boots",
                "Professional and warm",
                &["Oxford shoes", "Dress boots", "Loafers", "Formal boots"],
            ),
        ],
        accessories: vec![
            ClothingItem::new(
                "neck",
                "Silk Scarf",
                "Elegant and warm",
                &["Wool scarf", "Cashmere scarf", "Tie", "Bow tie"],
            ),
            ClothingItem::new(
                "hands",
                "Leather Gloves",
                "Professional appearance",
                &["Wool gloves", "Cashmere gloves", "Driving gloves", "Dress gloves"],
            ),
        ],
        colors: ColorScheme::new(
            &["Black", "Navy", "Charcoal", "Dark Gray"],
            &["Burgundy", "Deep Blue", "Forest Green", "Brown"],
            &["Silver", "Gold", "Deep Red", "Royal Blue"],
        ),
        style: Style::Formal,
    }
}

fn cold_casual() -> OutfitRecommendation {
    OutfitRecommendation {
        id: "cold-casual".to_string(),
        name: "Cold Weather Casual".to_string(),
        description: "Comfortable layers for chilly days".to_string(),
        items: vec![
            ClothingItem::new(
                "top",
                "Long-Sleeve Shirt",
                "Comfortable base layer",
                &["Henley shirt", "Thermal top", "Cotton tee", "Flannel shirt"],
            ),
            ClothingItem::new(
                "mid",
                "Sweater",
                "Warm middle layer",
                &["Hoodie", "Cardigan", "Pullover", "Fleece jacket"],
            ),
            ClothingItem::new(
                "outer",
                "Jacket",
                "Wind and cold protection",
                &["Denim jacket", "Bomber jacket", "Windbreaker", "Light coat"],
            ),
            ClothingItem::new(
                "bottom",
                "Jeans",
                "Sturdy and warm",
                &["Chinos", "Corduroy pants", "Thermal leggings", "Cargo pants"],
            ),
            ClothingItem::new(
                "footwear",
                "Sneakers",
                "Comfortable and versatile",
                &["Boots", "Loafers", "High-tops", "Canvas shoes"],
            ),
        ],
        accessories: vec![
            ClothingItem::new(
                "head",
                "Beanie",
                "Keeps head warm",
                &["Baseball cap", "Knit hat", "Headband", "Beret"],
            ),
            ClothingItem::new(
                "neck",
                "Light Scarf",
                "Added warmth",
                &["Neck warmer", "Bandana", "Infinity scarf", "Lightweight wrap"],
            ),
        ],
        colors: ColorScheme::new(
            &["Navy", "Gray", "Black", "Brown"],
            &["Olive", "Burgundy", "Teal", "Rust"],
            &["Orange", "Yellow", "Red", "Blue"],
        ),
        style: Style::Casual,
    }
}

fn cold_sporty() -> OutfitRecommendation {
    OutfitRecommendation {
        id: "cold-sporty".to_string(),
        name: "Cold Weather Athletic".to_string(),
        description: "Active wear for cold conditions".to_string(),
        items: vec![
            ClothingItem::new(
                "top",
                "Athletic Base Layer",
                "Moisture-wicking material",
                &[
                    "Compression shirt",
                    "Thermal athletic top",
                    "Long-sleeve athletic tee",
                    "Performance shirt",
                ],
            ),
            ClothingItem::new(
                "mid",
                "Athletic Hoodie",
                "Warm and flexible",
                &["Track jacket", "Fleece pullover", "Athletic sweater", "Zip-up hoodie"],
            ),
            ClothingItem::new(
                "outer",
                "Athletic Jacket",
                "Weather-resistant",
                &["Windbreaker", "Running jacket", "Softshell jacket", "Athletic vest"],
            ),
            ClothingItem::new(
                "bottom",
                "Athletic Pants",
                "Flexible and warm",
                &["Joggers", "Track pants", "Athletic leggings", "Sweatpants"],
            ),
            ClothingItem::new(
                "footwear",
                "Athletic Shoes",
                "Supportive and comfortable",
                &["Running shoes", "Cross-trainers", "High-top sneakers", "Athletic boots"],
            ),
        ],
        accessories: vec![
            ClothingItem::new(
                "head",
                "Athletic Beanie",
                "Moisture-wicking headwear",
                &["Sports cap", "Headband", "Thermal hat", "Athletic visor"],
            ),
            ClothingItem::new(
                "hands",
                "Athletic Gloves",
                "Grip and warmth",
                &["Running gloves", "Workout gloves", "Thermal gloves", "Fingerless gloves"],
            ),
        ],
        colors: ColorScheme::new(
            &["Black", "Navy", "Gray", "Dark Blue"],
            &["Red", "Green", "Purple", "Orange"],
            &["Neon Yellow", "Bright Blue", "Hot Pink", "Electric Green"],
        ),
        style: Style::Sporty,
    }
}

fn mild_casual() -> OutfitRecommendation {
    OutfitRecommendation {
        id: "mild-casual".to_string(),
        name: "Mild Weather Casual".to_string(),
        description: "Perfect for comfortable spring/fall days".to_string(),
        items: vec![
            ClothingItem::new(
                "top",
                "T-Shirt",
                "Comfortable and breathable",
                &["Long-sleeve tee", "Polo shirt", "Tank top", "Henley"],
            ),
            ClothingItem::new(
                "outer",
                "Light Cardigan",
                "Easy to remove if warm",
                &["Light jacket", "Denim jacket", "Blazer", "Zip-up hoodie"],
            ),
            ClothingItem::new(
                "bottom",
                "Jeans",
                "Classic and versatile",
                &["Chinos", "Khakis", "Casual pants", "Denim shorts"],
            ),
            ClothingItem::new(
                "footwear",
                "Sneakers",
                "Comfortable for walking",
                &["Loafers", "Canvas shoes", "Boat shoes", "Casual boots"],
            ),
        ],
        accessories: vec![ClothingItem::new(
            "eyes",
            "Sunglasses",
            "For sunny moments",
            &[
                "Reading glasses",
                "Blue light glasses",
                "Fashion glasses",
                "Sports sunglasses",
            ],
        )],
        colors: ColorScheme::new(
            &["Blue", "Gray", "White", "Khaki"],
            &["Green", "Purple", "Teal", "Coral"],
            &["Yellow", "Orange", "Pink", "Turquoise"],
        ),
        style: Style::Casual,
    }
}

fn mild_trendy() -> OutfitRecommendation {
    OutfitRecommendation {
        id: "mild-trendy".to_string(),
        name: "Mild Weather Trendy".to_string(),
        description: "Fashion-forward for pleasant weather".to_string(),
        items: vec![
            ClothingItem::new(
                "top",
                "Stylish Blouse",
                "Trendy and comfortable",
                &["Crop top", "Off-shoulder top", "Graphic tee", "Vintage shirt"],
            ),
            ClothingItem::new(
                "outer",
                "Trendy Jacket",
                "Statement piece",
                &["Leather jacket", "Bomber jacket", "Oversized blazer", "Kimono"],
            ),
            ClothingItem::new(
                "bottom",
                "Fashionable Pants",
                "On-trend bottoms",
                &["High-waisted jeans", "Wide-leg pants", "Culottes", "Palazzo pants"],
            ),
            ClothingItem::new(
                "footwear",
                "Trendy Shoes",
                "Fashion-forward footwear",
                &["Platform sneakers", "Ankle boots", "Espadrilles", "Fashion sneakers"],
            ),
        ],
        accessories: vec![
            ClothingItem::new(
                "jewelry",
                "Statement Jewelry",
                "Eye-catching accessories",
                &[
                    "Layered necklaces",
                    "Bold earrings",
                    "Stacked bracelets",
                    "Statement rings",
                ],
            ),
            ClothingItem::new(
                "bag",
                "Trendy Bag",
                "Fashionable and functional",
                &["Crossbody bag", "Tote bag", "Backpack", "Belt bag"],
            ),
        ],
        colors: ColorScheme::new(
            &["White", "Black", "Beige", "Denim Blue"],
            &["Sage Green", "Dusty Pink", "Lavender", "Terracotta"],
            &["Gold", "Rose Gold", "Coral", "Mint"],
        ),
        style: Style::Trendy,
    }
}

fn warm_casual() -> OutfitRecommendation {
    OutfitRecommendation {
        id: "warm-casual".to_string(),
        name: "Warm Weather Casual".to_string(),
        description: "Light and breezy for warm days".to_string(),
        items: vec![
            ClothingItem::new(
                "top",
                "Light T-Shirt",
                "Breathable and comfortable",
                &["Tank top", "Sleeveless blouse", "Linen shirt", "Cotton tee"],
            ),
            ClothingItem::new(
                "bottom",
                "Shorts",
                "Cool and comfortable",
                &["Linen pants", "Capri pants", "Skirt", "Light jeans"],
            ),
            ClothingItem::new(
                "footwear",
                "Sandals",
                "Breathable footwear",
                &["Canvas sneakers", "Flip-flops", "Espadrilles", "Boat shoes"],
            ),
        ],
        accessories: vec![
            ClothingItem::new(
                "head",
                "Sun Hat",
                "Protection from sun",
                &["Baseball cap", "Visor", "Bucket hat", "Wide-brim hat"],
            ),
            ClothingItem::new(
                "eyes",
                "Sunglasses",
                "UV protection",
                &[
                    "Polarized sunglasses",
                    "Fashion sunglasses",
                    "Sport sunglasses",
                    "Vintage frames",
                ],
            ),
        ],
        colors: ColorScheme::new(
            &["White", "Light Blue", "Beige", "Khaki"],
            &["Coral", "Mint", "Lavender", "Peach"],
            &["Bright Yellow", "Turquoise", "Hot Pink", "Lime Green"],
        ),
        style: Style::Casual,
    }
}

fn warm_beach() -> OutfitRecommendation {
    OutfitRecommendation {
        id: "warm-beach".to_string(),
        name: "Beach/Resort Style".to_string(),
        description: "Perfect for vacation or beach days".to_string(),
        items: vec![
            ClothingItem::new(
                "top",
                "Flowy Top",
                "Light and airy",
                &["Beach cover-up", "Kimono", "Camisole", "Halter top"],
            ),
            ClothingItem::new(
                "bottom",
                "Flowy Shorts",
                "Comfortable and breezy",
                &["Maxi skirt", "Beach pants", "Sarong", "Palazzo shorts"],
            ),
            ClothingItem::new(
                "footwear",
                "Beach Sandals",
                "Easy to slip on/off",
                &["Flip-flops", "Water shoes", "Espadrilles", "Barefoot"],
            ),
        ],
        accessories: vec![
            ClothingItem::new(
                "head",
                "Wide-Brim Hat",
                "Maximum sun protection",
                &["Straw hat", "Floppy hat", "Sun visor", "Bandana"],
            ),
            ClothingItem::new(
                "bag",
                "Beach Bag",
                "Large and practical",
                &["Tote bag", "Mesh bag", "Waterproof bag", "Straw bag"],
            ),
        ],
        colors: ColorScheme::new(
            &["White", "Cream", "Light Blue", "Sand"],
            &["Coral", "Aqua", "Sunset Orange", "Shell Pink"],
            &["Tropical Green", "Ocean Blue", "Sunset Yellow", "Flamingo Pink"],
        ),
        style: Style::Casual,
    }
}

fn hot_minimal() -> OutfitRecommendation {
    OutfitRecommendation {
        id: "hot-minimal".to_string(),
        name: "Hot Weather Minimal".to_string(),
        description: "Minimal clothing for maximum cooling".to_string(),
        items: vec![
            ClothingItem::new(
                "top",
                "Tank Top",
                "Maximum breathability",
                &["Sleeveless shirt", "Crop top", "Tube top", "Bandeau"],
            ),
            ClothingItem::new(
                "bottom",
                "Light Shorts",
                "Minimal coverage",
                &["Mini skirt", "Hot pants", "Bike shorts", "Board shorts"],
            ),
            ClothingItem::new(
                "footwear",
                "Minimal Sandals",
                "Barely there footwear",
                &["Flip-flops", "Slides", "Water shoes", "Barefoot"],
            ),
        ],
        accessories: vec![
            ClothingItem::new(
                "head",
                "Sun Protection",
                "Essential for hot sun",
                &["Wide-brim hat", "Baseball cap", "Visor", "UV umbrella"],
            ),
            ClothingItem::new(
                "skin",
                "Sunscreen",
                "SPF 50+ recommended",
                &["Zinc oxide", "Mineral sunscreen", "Spray sunscreen", "Tinted sunscreen"],
            ),
        ],
        colors: ColorScheme::new(
            &["White", "Ice Blue", "Pale Yellow", "Mint"],
            &["Light Pink", "Powder Blue", "Cream", "Pale Green"],
            &["Bright White", "Silver", "Light Gold", "Crystal Blue"],
        ),
        style: Style::Casual,
    }
}
