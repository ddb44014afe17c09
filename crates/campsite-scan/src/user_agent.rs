use rand::Rng;

/// Platform fragments seen in real browser user agents.
const PLATFORMS: &[&str] = &[
    "Macintosh; Intel Mac OS X 10_15_7",
    "Windows NT 10.0; Win64; x64",
    "X11; Linux x86_64",
];

/// Generate a realistic randomized Chrome user agent.
///
/// recreation.gov rejects requests that do not look like they come from a
/// browser, so the client attaches one of these unless the caller supplies
/// a `User-Agent` header of their own.
pub fn random_user_agent() -> String {
    let mut rng = rand::rng();
    let platform = PLATFORMS[rng.random_range(0..PLATFORMS.len())];
    let major = rng.random_range(120..=131);
    let build = rng.random_range(6000..6900);
    format!(
        "Mozilla/5.0 ({platform}) AppleWebKit/537.36 (KHTML, like Gecko) \
         Chrome/{major}.0.{build}.100 Safari/537.36"
    )
}
