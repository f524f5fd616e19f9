/// `(code, [en, zh, de, fr, es], autonym)`. Script-qualified entries come before the bare language.
pub(super) const LANGUAGES: &[(&str, [&str; 5], &str)] = &[
    ("ar", ["Arabic", "阿拉伯语", "Arabisch", "arabe", "árabe"], "العربية"),
    ("bn", ["Bangla", "孟加拉语", "Bengalisch", "bengali", "bengalí"], "বাংলা"),
    ("cs", ["Czech", "捷克语", "Tschechisch", "tchèque", "checo"], "čeština"),
    ("da", ["Danish", "丹麦语", "Dänisch", "danois", "danés"], "dansk"),
    ("de", ["German", "德语", "Deutsch", "allemand", "alemán"], "Deutsch"),
    ("el", ["Greek", "希腊语", "Griechisch", "grec", "griego"], "Ελληνικά"),
    ("en", ["English", "英语", "Englisch", "anglais", "inglés"], "English"),
    ("es", ["Spanish", "西班牙语", "Spanisch", "espagnol", "español"], "español"),
    ("fa", ["Persian", "波斯语", "Persisch", "persan", "persa"], "فارسی"),
    ("fi", ["Finnish", "芬兰语", "Finnisch", "finnois", "finés"], "suomi"),
    ("fil", ["Filipino", "菲律宾语", "Filipino", "filipino", "filipino"], "Filipino"),
    ("fr", ["French", "法语", "Französisch", "français", "francés"], "français"),
    ("he", ["Hebrew", "希伯来语", "Hebräisch", "hébreu", "hebreo"], "עברית"),
    ("hi", ["Hindi", "印地语", "Hindi", "hindi", "hindi"], "हिन्दी"),
    ("hu", ["Hungarian", "匈牙利语", "Ungarisch", "hongrois", "húngaro"], "magyar"),
    ("id", ["Indonesian", "印度尼西亚语", "Indonesisch", "indonésien", "indonesio"], "Indonesia"),
    ("it", ["Italian", "意大利语", "Italienisch", "italien", "italiano"], "italiano"),
    ("ja", ["Japanese", "日语", "Japanisch", "japonais", "japonés"], "日本語"),
    ("ko", ["Korean", "韩语", "Koreanisch", "coréen", "coreano"], "한국어"),
    ("mr", ["Marathi", "马拉地语", "Marathi", "marathi", "maratí"], "मराठी"),
    ("ms", ["Malay", "马来语", "Malaiisch", "malais", "malayo"], "Melayu"),
    ("my", ["Burmese", "缅甸语", "Birmanisch", "birman", "birmano"], "မြန်မာ"),
    (
        "nb",
        ["Norwegian Bokmål", "书面挪威语", "Norwegisch (Bokmål)", "norvégien bokmål", "noruego bokmal"],
        "norsk bokmål",
    ),
    ("ne", ["Nepali", "尼泊尔语", "Nepalesisch", "népalais", "nepalí"], "नेपाली"),
    ("nl", ["Dutch", "荷兰语", "Niederländisch", "néerlandais", "neerlandés"], "Nederlands"),
    ("pl", ["Polish", "波兰语", "Polnisch", "polonais", "polaco"], "polski"),
    ("pt", ["Portuguese", "葡萄牙语", "Portugiesisch", "portugais", "portugués"], "português"),
    ("ro", ["Romanian", "罗马尼亚语", "Rumänisch", "roumain", "rumano"], "română"),
    ("ru", ["Russian", "俄语", "Russisch", "russe", "ruso"], "русский"),
    ("sv", ["Swedish", "瑞典语", "Schwedisch", "suédois", "sueco"], "svenska"),
    ("th", ["Thai", "泰语", "Thailändisch", "thaï", "tailandés"], "ไทย"),
    ("tr", ["Turkish", "土耳其语", "Türkisch", "turc", "turco"], "Türkçe"),
    ("uk", ["Ukrainian", "乌克兰语", "Ukrainisch", "ukrainien", "ucraniano"], "українська"),
    ("ur", ["Urdu", "乌尔都语", "Urdu", "ourdou", "urdu"], "اردو"),
    ("vi", ["Vietnamese", "越南语", "Vietnamesisch", "vietnamien", "vietnamita"], "Tiếng Việt"),
    ("yue", ["Cantonese", "粤语", "Kantonesisch", "cantonais", "cantonés"], "粵語"),
    (
        "zh-Hans",
        [
            "Simplified Chinese",
            "简体中文",
            "Chinesisch (vereinfacht)",
            "chinois simplifié",
            "chino simplificado",
        ],
        "简体中文",
    ),
    (
        "zh-Hant",
        [
            "Traditional Chinese",
            "繁体中文",
            "Chinesisch (traditionell)",
            "chinois traditionnel",
            "chino tradicional",
        ],
        "繁體中文",
    ),
    ("zh", ["Chinese", "中文", "Chinesisch", "chinois", "chino"], "中文"),
];
