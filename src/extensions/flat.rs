use super::Extension;
use crate::assets::Asset;
use crate::hiverc::Hiverc;

/// A pre-scanned list of assets added by one generated hiverc.
///
/// Dotfiles in the list are skipped.
#[derive(Debug, Clone, Default)]
pub struct Flat {
    hivercs: Vec<Hiverc>,
}

impl Flat {
    pub fn new(assets: Vec<Asset>) -> Self {
        let visible: Vec<Asset> = assets.into_iter().filter(|asset| !asset.hidden()).collect();
        let hivercs = Hiverc::from_assets(&visible).into_iter().collect();
        Self { hivercs }
    }
}

impl Extension for Flat {
    fn hivercs(&self) -> &[Hiverc] {
        &self.hivercs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::asset_for;

    #[test]
    fn keeps_input_order_in_a_single_hiverc() {
        let flat = Flat::new(vec![asset_for("/e/b.jar"), asset_for("/e/a.txt")]);
        assert_eq!(flat.hivercs().len(), 1);
        assert_eq!(
            flat.hivercs()[0].content(),
            b"ADD JAR /e/b.jar;\nADD FILE /e/a.txt;\n"
        );
        assert_eq!(flat.hive_aux_jars_path(), None);
    }

    #[test]
    fn dotfiles_are_skipped() {
        let flat = Flat::new(vec![asset_for("/e/.DS_Store"), asset_for("/e/udf.jar")]);
        assert_eq!(flat.hivercs()[0].content(), b"ADD JAR /e/udf.jar;\n");
        assert!(Flat::new(vec![asset_for("/e/.hidden.jar")]).hivercs().is_empty());
    }

    #[test]
    fn empty_assets_contribute_nothing() {
        assert!(Flat::new(Vec::new()).hivercs().is_empty());
    }
}
