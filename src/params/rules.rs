//! Static referrer and tracker parameter sets.
//!
//! Both sets are exact, case-sensitive key names, built once per process.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Keys identifying the referring engine, campaign or context.
pub static REFERRER_PARAMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // Search engine / browser source
        "sourceid",
        "sxsrf",
        "client",
        "rlz",
        "hl_src",
        // Urchin campaign parameters
        "utm_source",
        "utm_medium",
        "utm_campaign",
        "utm_term",
        "utm_content",
        "utm_id",
        "utm_name",
        "utm_reader",
        "utm_brand",
        "utm_social",
        "utm_social-type",
        // Generic referrer markers
        "ref",
        "ref_",
        "ref_src",
        "ref_url",
        "referrer",
        "referer",
        "referral",
        "share",
        "share_source",
        "shared",
        "feature",
        "via",
    ]
    .into_iter()
    .collect()
});

/// Keys set by analytics and marketing systems to attribute traffic.
pub static TRACKER_PARAMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // Google search
        "ei",
        "aqs",
        "ved",
        "uact",
        "gs_lcp",
        "gs_lcrp",
        "gs_lp",
        "gs_ssp",
        "oq",
        "iflsig",
        "sclient",
        "bih",
        "biw",
        "dpr",
        // Ad click identifiers
        "gclid",
        "gclsrc",
        "dclid",
        "gbraid",
        "wbraid",
        "fbclid",
        "msclkid",
        "yclid",
        "twclid",
        "ttclid",
        "li_fat_id",
        "igshid",
        "igsh",
        "epik",
        // Email marketing
        "mkt_tok",
        "mc_cid",
        "mc_eid",
        "_hsenc",
        "_hsmi",
        "__hssc",
        "__hstc",
        "__hsfp",
        "hsCtaTracking",
        "vero_id",
        "vero_conv",
        "oly_anon_id",
        "oly_enc_id",
        "_openstat",
        "wickedid",
        "rb_clickid",
        "s_cid",
        "ml_subscriber",
        "ml_subscriber_hash",
        "ck_subscriber_id",
        // Matomo / Piwik
        "pk_campaign",
        "pk_kwd",
        "pk_source",
        "pk_medium",
        "pk_content",
        "mtm_campaign",
        "mtm_source",
        "mtm_medium",
        "mtm_content",
        "mtm_keyword",
        // Affiliate and misc
        "_ga",
        "_gl",
        "spm",
        "scm",
        "si",
        "trk",
        "trkCampaign",
        "cvid",
        "oicd",
    ]
    .into_iter()
    .collect()
});
