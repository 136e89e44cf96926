use crate::domain::model::{CategoryBucket, CategoryCount, Partner};

impl CategoryBucket {
    pub const ALL: [CategoryBucket; 4] = [
        CategoryBucket::All,
        CategoryBucket::Healthcare,
        CategoryBucket::Shopping,
        CategoryBucket::Transport,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CategoryBucket::All => "All Partners",
            CategoryBucket::Healthcare => "Healthcare",
            CategoryBucket::Shopping => "Shopping",
            CategoryBucket::Transport => "Transport",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            CategoryBucket::All => "bg-uae-green",
            CategoryBucket::Healthcare => "bg-uae-red",
            CategoryBucket::Shopping => "bg-uae-black",
            CategoryBucket::Transport => "bg-blue-600",
        }
    }

    /// Lower-case substrings that place a category in this bucket.
    /// `All` has none: every partner belongs to it.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            CategoryBucket::All => &[],
            CategoryBucket::Healthcare => &["health"],
            CategoryBucket::Shopping => &["shop", "retail"],
            CategoryBucket::Transport => &["transport"],
        }
    }

    pub fn matches(self, category: &str) -> bool {
        if self == CategoryBucket::All {
            return true;
        }
        let category = category.to_lowercase();
        self.keywords().iter().any(|keyword| category.contains(keyword))
    }
}

/// Counts the held partners into the four fixed buckets, in display order.
pub fn count_categories(partners: &[Partner]) -> Vec<CategoryCount> {
    CategoryBucket::ALL
        .iter()
        .map(|&bucket| CategoryCount {
            bucket,
            name: bucket.label(),
            count: partners
                .iter()
                .filter(|p| bucket.matches(&p.category))
                .count(),
            color: bucket.color(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::PartnerId;

    fn partner(id: u64, category: &str) -> Partner {
        Partner {
            id: PartnerId::Number(id),
            name: format!("Partner {}", id),
            category: category.to_string(),
            location: "Abu Dhabi".to_string(),
            description: String::new(),
            discount: "10%".to_string(),
            logo: None,
        }
    }

    fn counts(partners: &[Partner]) -> Vec<(&'static str, usize)> {
        count_categories(partners)
            .into_iter()
            .map(|c| (c.name, c.count))
            .collect()
    }

    #[test]
    fn test_mixed_case_categories() {
        let partners = vec![
            partner(1, "Healthcare"),
            partner(2, "Retail Shop"),
            partner(3, "TRANSPORT"),
            partner(4, "Other"),
        ];

        assert_eq!(
            counts(&partners),
            vec![
                ("All Partners", 4),
                ("Healthcare", 1),
                ("Shopping", 1),
                ("Transport", 1)
            ]
        );
    }

    #[test]
    fn test_empty_list_counts_zero() {
        assert!(count_categories(&[]).iter().all(|c| c.count == 0));
    }

    #[test]
    fn test_shop_and_retail_counted_once() {
        // "Retail Shop" hits both keywords but is one partner.
        let partners = vec![partner(1, "Retail Shop"), partner(2, "e-Shopping")];
        assert_eq!(counts(&partners)[2], ("Shopping", 2));
    }

    #[test]
    fn test_partner_may_fall_into_several_buckets() {
        let partners = vec![partner(1, "Health Shop")];
        let counts = counts(&partners);
        assert_eq!(counts[1], ("Healthcare", 1));
        assert_eq!(counts[2], ("Shopping", 1));
    }

    #[test]
    fn test_colors_follow_buckets() {
        let colors: Vec<_> = count_categories(&[]).into_iter().map(|c| c.color).collect();
        assert_eq!(
            colors,
            vec!["bg-uae-green", "bg-uae-red", "bg-uae-black", "bg-blue-600"]
        );
    }
}
