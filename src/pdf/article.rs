use crate::core::{Article, Drain, clean};

/// Build the display string for the article column.
///
/// Parts appear in fixed order — group, model, wall build, color, drain —
/// and only when present, so absent attributes leave no stray separators.
/// Free-text attributes are cleaned here as well, in case an [`Article`]
/// was constructed without going through the builder.
///
/// ```
/// use bestellung::core::{Article, Color, Drain, WallBuild};
/// use bestellung::pdf::article_description;
///
/// let article = Article::Bins {
///     model: Some("BI-565".into()),
///     color: Some(Color::Blue),
///     wall_build: Some(WallBuild::Epe),
///     drain: Some(Drain::OneInch),
/// };
/// assert_eq!(
///     article_description(&article),
///     "Bins, Mod. BI-565, (EPE), Blue, drain: 1\" drain"
/// );
/// ```
pub fn article_description(article: &Article) -> String {
    let mut parts = vec![article.group().label().to_string()];

    let (model, color) = match article {
        Article::Bins { model, color, .. }
        | Article::Lids { model, color, .. }
        | Article::Buggies { model, color }
        | Article::Pallets { model, color } => (model, color),
    };
    let wall_build = match article {
        Article::Bins { wall_build, .. } | Article::Lids { wall_build, .. } => *wall_build,
        _ => None,
    };

    if let Some(model) = model.as_deref().and_then(clean) {
        parts.push(format!("Mod. {model}"));
    }
    if let Some(wall) = wall_build {
        parts.push(format!("({})", wall.label()));
    }
    if let Some(color) = color {
        if let Some(label) = clean(color.label()) {
            parts.push(label);
        }
    }
    if let Article::Bins {
        drain: Some(drain), ..
    } = article
    {
        if !matches!(drain, Drain::None) {
            if let Some(label) = clean(drain.label()) {
                parts.push(format!("drain: {label}"));
            }
        }
    }

    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, WallBuild};

    #[test]
    fn bins_with_everything() {
        let article = Article::Bins {
            model: Some("BI-565".into()),
            color: Some(Color::Blue),
            wall_build: Some(WallBuild::Epe),
            drain: Some(Drain::OneInch),
        };
        assert_eq!(
            article_description(&article),
            "Bins, Mod. BI-565, (EPE), Blue, drain: 1\" drain"
        );
    }

    #[test]
    fn lids_with_blank_optionals() {
        let article = Article::Lids {
            model: Some("".into()),
            color: Some(Color::Other("nan".into())),
            wall_build: None,
        };
        assert_eq!(article_description(&article), "Lids");
    }

    #[test]
    fn drain_none_is_suppressed() {
        let article = Article::Bins {
            model: Some("BI-300".into()),
            color: None,
            wall_build: None,
            drain: Some(Drain::None),
        };
        assert_eq!(article_description(&article), "Bins, Mod. BI-300");
    }

    #[test]
    fn drain_only_exists_for_bins() {
        let article = Article::Buggies {
            model: Some("BU-90".into()),
            color: Some(Color::Red),
        };
        assert_eq!(article_description(&article), "Buggies, Mod. BU-90, Red");
    }

    #[test]
    fn free_text_color_and_drain() {
        let article = Article::Bins {
            model: None,
            color: Some(Color::Other("RAL 5010".into())),
            wall_build: Some(WallBuild::Pur),
            drain: Some(Drain::Other("custom 3\"".into())),
        };
        assert_eq!(
            article_description(&article),
            "Bins, (PUR), RAL 5010, drain: custom 3\""
        );
    }
}
