use std::str::FromStr;

use obesity_model::ObesityCategory;

/// Lifestyle and diet advice shown for a predicted category.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RecommendationPair {
    pub lifestyle: &'static str,
    pub diet: &'static str,
}

impl RecommendationPair {
    /// Returned for labels outside the known categories.
    pub const FALLBACK: Self = Self {
        lifestyle: "Tidak ada rekomendasi khusus.",
        diet: "Tidak ada rekomendasi khusus.",
    };
}

pub fn recommend(category: ObesityCategory) -> RecommendationPair {
    match category {
        ObesityCategory::InsufficientWeight => RecommendationPair {
            lifestyle: "Tingkatkan asupan kalori Anda dan konsultasikan dengan ahli gizi untuk memastikan Anda mendapatkan nutrisi yang cukup.",
            diet: "Konsumsi makanan kaya nutrisi seperti kacang-kacangan, biji-bijian, susu penuh lemak, daging tanpa lemak, dan buah-buahan. Hindari makanan cepat saji meskipun berkalori tinggi.",
        },
        ObesityCategory::NormalWeight => RecommendationPair {
            lifestyle: "Pertahankan pola makan seimbang dan rutin berolahraga untuk menjaga berat badan tetap stabil.",
            diet: "Konsumsilah biji-bijian utuh, protein tanpa lemak, sayuran, dan buah-buahan. Hindari makanan olahan.",
        },
        ObesityCategory::OverweightLevelI => RecommendationPair {
            lifestyle: "Tingkatkan aktivitas fisik seperti jalan cepat selama 30-45 menit setiap hari.",
            diet: "Kurangi konsumsi makanan manis dan berlemak tinggi. Tambahkan lebih banyak sayuran, protein tanpa lemak, dan lemak sehat seperti kacang-kacangan.",
        },
        ObesityCategory::OverweightLevelII => RecommendationPair {
            lifestyle: "Pertimbangkan untuk bergabung dengan program kebugaran yang terstruktur dan kurangi kebiasaan duduk terlalu lama.",
            diet: "Fokus pada pengendalian porsi. Tambahkan makanan tinggi serat, produk susu rendah lemak, dan batasi makanan yang digoreng.",
        },
        ObesityCategory::ObesityTypeI => RecommendationPair {
            lifestyle: "Tingkatkan aktivitas aerobik dan konsultasikan dengan pelatih kebugaran untuk rutinitas latihan yang dipersonalisasi.",
            diet: "Adopsi pola makan dengan defisit kalori. Tambahkan lebih banyak protein nabati dan batasi lemak jenuh.",
        },
        ObesityCategory::ObesityTypeII => RecommendationPair {
            lifestyle: "Dapatkan saran dari ahli gizi atau ahli diet untuk rencana yang dipersonalisasi dan fokus pada latihan kekuatan.",
            diet: "Ikuti pola makan rendah karbohidrat dan tinggi protein. Hindari minuman manis dan pantau asupan kalori.",
        },
    }
}

pub fn recommend_label(label: &str) -> RecommendationPair {
    ObesityCategory::from_str(label)
        .map(recommend)
        .unwrap_or(RecommendationPair::FALLBACK)
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_category_has_specific_advice() {
        for (i, category) in ObesityCategory::iter().enumerate() {
            let pair = recommend(category);
            assert!(!pair.lifestyle.is_empty(), "Test case #{}", i);
            assert!(!pair.diet.is_empty(), "Test case #{}", i);
            assert_ne!(pair, RecommendationPair::FALLBACK, "Test case #{}", i);
            assert_eq!(recommend_label(category.label()), pair, "Test case #{}", i);
        }
    }

    #[test]
    fn lookup_is_stable() {
        assert_eq!(
            recommend(ObesityCategory::ObesityTypeI),
            recommend(ObesityCategory::ObesityTypeI)
        );
    }

    #[test]
    fn unknown_labels_fall_back() {
        for (i, label) in ["Obesity_Type_III", "", "normal_weight"].into_iter().enumerate() {
            assert_eq!(
                recommend_label(label),
                RecommendationPair::FALLBACK,
                "Test case #{}",
                i
            );
        }
    }
}
