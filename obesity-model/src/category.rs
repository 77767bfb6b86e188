use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Obesity level predicted by the classifier, ordered from the lightest
/// to the heaviest category.
///
/// The textual form is the label used by the training data set, e.g.
/// `Overweight_Level_I`.
#[derive(
    Clone, Copy, Debug, Display, EnumIter, EnumString, IntoStaticStr, Eq, Hash, Ord, PartialEq, PartialOrd,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
pub enum ObesityCategory {
    #[strum(to_string = "Insufficient_Weight")]
    InsufficientWeight,
    #[strum(to_string = "Normal_Weight")]
    NormalWeight,
    #[strum(to_string = "Overweight_Level_I")]
    OverweightLevelI,
    #[strum(to_string = "Overweight_Level_II")]
    OverweightLevelII,
    #[strum(to_string = "Obesity_Type_I")]
    ObesityTypeI,
    #[strum(to_string = "Obesity_Type_II")]
    ObesityTypeII,
}

impl ObesityCategory {
    pub fn label(self) -> &'static str {
        self.into()
    }
}
