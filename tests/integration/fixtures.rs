use fake::faker::lorem::en::Word;
use fake::Fake;

pub struct Listing {
    pub references: Vec<String>,
    pub expected_successes: Vec<String>,
    pub expected_failures: Vec<String>,
    /// Normalized (ssh) URLs the executor should reject.
    pub failing_urls: Vec<String>,
}

/// `count` references mixing https and ssh forms, malformed lines and
/// clones that fail.
pub fn mixed_listing(count: usize) -> Listing {
    let mut listing = Listing {
        references: Vec::new(),
        expected_successes: Vec::new(),
        expected_failures: Vec::new(),
        failing_urls: Vec::new(),
    };

    for n in 0..count {
        let owner: String = Word().fake();
        let repository = format!("{}-{}", Word().fake::<String>(), n);

        if n % 5 == 0 {
            let reference = format!("malformed{}", n);
            listing.expected_failures.push(reference.clone());
            listing.references.push(reference);
            continue;
        }

        let reference = if n % 2 == 0 {
            format!("https://github.com/{}/{}.git", owner, repository)
        } else {
            format!("git@github.com:{}/{}.git", owner, repository)
        };

        if n % 7 == 0 {
            listing
                .failing_urls
                .push(format!("git@github.com:{}/{}.git", owner, repository));
            listing.expected_failures.push(reference.clone());
        } else {
            listing
                .expected_successes
                .push(format!("{}-{}", owner, repository));
        }
        listing.references.push(reference);
    }

    listing
}
