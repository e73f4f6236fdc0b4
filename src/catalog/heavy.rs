use super::HeavyPackage;

/// Known heavy libraries, heaviest first.
pub static HEAVY_PACKAGES: &[HeavyPackage] = &[
    HeavyPackage {
        name: "react-native-paper",
        size_kb: 300,
        category: "UI Kit",
        alternative: None,
    },
    HeavyPackage {
        name: "moment",
        size_kb: 290,
        category: "Dates",
        alternative: Some("dayjs"),
    },
    HeavyPackage {
        name: "react-native-maps",
        size_kb: 250,
        category: "Maps",
        alternative: None,
    },
    HeavyPackage {
        name: "react-native-reanimated",
        size_kb: 200,
        category: "Animation",
        alternative: None,
    },
    HeavyPackage {
        name: "lottie-react-native",
        size_kb: 150,
        category: "Animation",
        alternative: None,
    },
    HeavyPackage {
        name: "leaflet",
        size_kb: 145,
        category: "Maps (web)",
        alternative: None,
    },
    HeavyPackage {
        name: "react-native-svg",
        size_kb: 120,
        category: "Graphics",
        alternative: None,
    },
    HeavyPackage {
        name: "react-native-webview",
        size_kb: 90,
        category: "WebView",
        alternative: None,
    },
    HeavyPackage {
        name: "lodash",
        size_kb: 70,
        category: "Utilities",
        alternative: Some("lodash-es"),
    },
    HeavyPackage {
        name: "@shopify/flash-list",
        size_kb: 60,
        category: "Lists",
        alternative: None,
    },
    HeavyPackage {
        name: "@tanstack/react-query",
        size_kb: 45,
        category: "Data Fetching",
        alternative: None,
    },
    HeavyPackage {
        name: "react-leaflet",
        size_kb: 40,
        category: "Maps (web)",
        alternative: None,
    },
    HeavyPackage {
        name: "axios",
        size_kb: 30,
        category: "HTTP",
        alternative: Some("fetch"),
    },
];
