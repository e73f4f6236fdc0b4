use super::{AuditAction, DuplicateGroup, LazyLoadCandidate, Recommendations, UnusedCandidate};

pub static UNUSED_CANDIDATES: &[UnusedCandidate] = &[
    UnusedCandidate {
        name: "moment",
        reason: "Date formatting is covered by Intl and date helpers",
        action: AuditAction::Remove,
    },
    UnusedCandidate {
        name: "lodash",
        reason: "Only a handful of helpers imported; native equivalents exist",
        action: AuditAction::Review,
    },
    UnusedCandidate {
        name: "axios",
        reason: "fetchWithTimeout wraps native fetch for all API calls",
        action: AuditAction::Review,
    },
    UnusedCandidate {
        name: "react-native-paper",
        reason: "Design system components replace most Paper widgets",
        action: AuditAction::Review,
    },
    UnusedCandidate {
        name: "react-native-elements",
        reason: "No imports found in components/ or app/",
        action: AuditAction::Remove,
    },
    UnusedCandidate {
        name: "react-native-vector-icons",
        reason: "@expo/vector-icons ships the same icon sets",
        action: AuditAction::Remove,
    },
    UnusedCandidate {
        name: "react-native-webview",
        reason: "Should only be reached from embedded content screens",
        action: AuditAction::Verify,
    },
    UnusedCandidate {
        name: "lottie-react-native",
        reason: "Used by a single onboarding animation",
        action: AuditAction::Verify,
    },
];

pub static DUPLICATE_GROUPS: &[DuplicateGroup] = &[
    DuplicateGroup {
        packages: &["react-native-maps", "leaflet", "react-leaflet"],
        reason: "Separate map stacks for native and web",
        recommendation: "Keep react-native-maps for native; load leaflet only on web",
        estimated_savings: "~150-200 KB on web",
    },
    DuplicateGroup {
        packages: &["moment", "date-fns", "dayjs"],
        reason: "Multiple date libraries",
        recommendation: "Standardise on dayjs or date-fns",
        estimated_savings: "~70-290 KB",
    },
    DuplicateGroup {
        packages: &["axios", "ky", "node-fetch"],
        reason: "Multiple HTTP clients alongside native fetch",
        recommendation: "Use native fetch through the shared client",
        estimated_savings: "~15-30 KB",
    },
    DuplicateGroup {
        packages: &["react-native-paper", "react-native-elements", "native-base"],
        reason: "Overlapping UI component kits",
        recommendation: "Migrate remaining screens to the in-house design system",
        estimated_savings: "~200-300 KB",
    },
    DuplicateGroup {
        packages: &["@expo/vector-icons", "react-native-vector-icons"],
        reason: "Same icon fonts packaged twice",
        recommendation: "Keep @expo/vector-icons only",
        estimated_savings: "~50-100 KB",
    },
    DuplicateGroup {
        packages: &["lodash", "lodash-es", "underscore"],
        reason: "Multiple utility belts",
        recommendation: "Prefer lodash-es per-method imports or native code",
        estimated_savings: "~20-70 KB",
    },
];

pub static LAZY_LOAD_CANDIDATES: &[LazyLoadCandidate] = &[
    LazyLoadCandidate {
        name: "react-native-maps",
        lazy: true,
        size_kb: 250,
        purpose: "Native map views",
        trigger: "Opening a map screen",
    },
    LazyLoadCandidate {
        name: "leaflet",
        lazy: true,
        size_kb: 145,
        purpose: "Web map rendering",
        trigger: "Map tab shown on web",
    },
    LazyLoadCandidate {
        name: "react-leaflet",
        lazy: true,
        size_kb: 40,
        purpose: "React bindings for Leaflet",
        trigger: "Map tab shown on web",
    },
    LazyLoadCandidate {
        name: "lottie-react-native",
        lazy: true,
        size_kb: 150,
        purpose: "Onboarding animations",
        trigger: "First launch onboarding",
    },
    LazyLoadCandidate {
        name: "react-native-webview",
        lazy: true,
        size_kb: 90,
        purpose: "Embedded third-party pages",
        trigger: "Opening an external article",
    },
    LazyLoadCandidate {
        name: "html2canvas",
        lazy: true,
        size_kb: 200,
        purpose: "PDF export snapshots",
        trigger: "Export to PDF action",
    },
    LazyLoadCandidate {
        name: "react-native-reanimated",
        lazy: false,
        size_kb: 200,
        purpose: "Navigation and gesture animations",
        trigger: "Needed at startup",
    },
    LazyLoadCandidate {
        name: "@tanstack/react-query",
        lazy: false,
        size_kb: 45,
        purpose: "Data fetching cache",
        trigger: "Needed at startup",
    },
];

pub static RECOMMENDATIONS: Recommendations = Recommendations {
    immediate: &[
        "Remove packages marked REMOVE after confirming no imports remain",
        "Collapse duplicate groups to a single package each",
        "Exclude react-native-maps from the web bundle",
    ],
    next_phase: &[
        "Move lazy-load candidates behind dynamic import()",
        "Split large screen components into route-level chunks",
        "Replace lodash helpers with native equivalents",
    ],
    final_phase: &[
        "Measure the production web bundle and set a size budget",
        "Fail CI when the initial bundle exceeds the budget",
        "Re-run this audit after each dependency upgrade",
    ],
};
