/// `(code, [en, zh, de, fr, es])`.
pub(super) const REGIONS: &[(&str, [&str; 5])] = &[
    ("001", ["World", "世界", "Welt", "Monde", "Mundo"]),
    ("419", ["Latin America", "拉丁美洲", "Lateinamerika", "Amérique latine", "Latinoamérica"]),
    ("AE", [
        "United Arab Emirates",
        "阿拉伯联合酋长国",
        "Vereinigte Arabische Emirate",
        "Émirats arabes unis",
        "Emiratos Árabes Unidos",
    ]),
    ("AR", ["Argentina", "阿根廷", "Argentinien", "Argentine", "Argentina"]),
    ("AT", ["Austria", "奥地利", "Österreich", "Autriche", "Austria"]),
    ("AU", ["Australia", "澳大利亚", "Australien", "Australie", "Australia"]),
    ("BD", ["Bangladesh", "孟加拉国", "Bangladesch", "Bangladesh", "Bangladés"]),
    ("BE", ["Belgium", "比利时", "Belgien", "Belgique", "Bélgica"]),
    ("BR", ["Brazil", "巴西", "Brasilien", "Brésil", "Brasil"]),
    ("CA", ["Canada", "加拿大", "Kanada", "Canada", "Canadá"]),
    ("CH", ["Switzerland", "瑞士", "Schweiz", "Suisse", "Suiza"]),
    ("CN", ["China", "中国", "China", "Chine", "China"]),
    ("DE", ["Germany", "德国", "Deutschland", "Allemagne", "Alemania"]),
    ("DK", ["Denmark", "丹麦", "Dänemark", "Danemark", "Dinamarca"]),
    ("EG", ["Egypt", "埃及", "Ägypten", "Égypte", "Egipto"]),
    ("ES", ["Spain", "西班牙", "Spanien", "Espagne", "España"]),
    ("FI", ["Finland", "芬兰", "Finnland", "Finlande", "Finlandia"]),
    ("FR", ["France", "法国", "Frankreich", "France", "Francia"]),
    ("GB", ["United Kingdom", "英国", "Vereinigtes Königreich", "Royaume-Uni", "Reino Unido"]),
    ("HK", [
        "Hong Kong SAR China",
        "中国香港特别行政区",
        "Sonderverwaltungsregion Hongkong",
        "R.A.S. chinoise de Hong Kong",
        "RAE de Hong Kong (China)",
    ]),
    ("ID", ["Indonesia", "印度尼西亚", "Indonesien", "Indonésie", "Indonesia"]),
    ("IE", ["Ireland", "爱尔兰", "Irland", "Irlande", "Irlanda"]),
    ("IL", ["Israel", "以色列", "Israel", "Israël", "Israel"]),
    ("IN", ["India", "印度", "Indien", "Inde", "India"]),
    ("IR", ["Iran", "伊朗", "Iran", "Iran", "Irán"]),
    ("IT", ["Italy", "意大利", "Italien", "Italie", "Italia"]),
    ("JP", ["Japan", "日本", "Japan", "Japon", "Japón"]),
    ("KR", ["South Korea", "韩国", "Südkorea", "Corée du Sud", "Corea del Sur"]),
    ("MM", ["Myanmar (Burma)", "缅甸", "Myanmar", "Myanmar (Birmanie)", "Myanmar (Birmania)"]),
    ("MO", [
        "Macao SAR China",
        "中国澳门特别行政区",
        "Sonderverwaltungsregion Macau",
        "R.A.S. chinoise de Macao",
        "RAE de Macao (China)",
    ]),
    ("MX", ["Mexico", "墨西哥", "Mexiko", "Mexique", "México"]),
    ("MY", ["Malaysia", "马来西亚", "Malaysia", "Malaisie", "Malasia"]),
    ("NL", ["Netherlands", "荷兰", "Niederlande", "Pays-Bas", "Países Bajos"]),
    ("NO", ["Norway", "挪威", "Norwegen", "Norvège", "Noruega"]),
    ("NP", ["Nepal", "尼泊尔", "Nepal", "Népal", "Nepal"]),
    ("NZ", ["New Zealand", "新西兰", "Neuseeland", "Nouvelle-Zélande", "Nueva Zelanda"]),
    ("PH", ["Philippines", "菲律宾", "Philippinen", "Philippines", "Filipinas"]),
    ("PK", ["Pakistan", "巴基斯坦", "Pakistan", "Pakistan", "Pakistán"]),
    ("PL", ["Poland", "波兰", "Polen", "Pologne", "Polonia"]),
    ("PT", ["Portugal", "葡萄牙", "Portugal", "Portugal", "Portugal"]),
    ("RU", ["Russia", "俄罗斯", "Russland", "Russie", "Rusia"]),
    ("SA", ["Saudi Arabia", "沙特阿拉伯", "Saudi-Arabien", "Arabie saoudite", "Arabia Saudí"]),
    ("SE", ["Sweden", "瑞典", "Schweden", "Suède", "Suecia"]),
    ("SG", ["Singapore", "新加坡", "Singapur", "Singapour", "Singapur"]),
    ("TH", ["Thailand", "泰国", "Thailand", "Thaïlande", "Tailandia"]),
    ("TR", ["Türkiye", "土耳其", "Türkei", "Turquie", "Turquía"]),
    ("TW", ["Taiwan", "台湾", "Taiwan", "Taïwan", "Taiwán"]),
    ("UA", ["Ukraine", "乌克兰", "Ukraine", "Ukraine", "Ucrania"]),
    ("US", ["United States", "美国", "Vereinigte Staaten", "États-Unis", "Estados Unidos"]),
    ("VN", ["Vietnam", "越南", "Vietnam", "Viêt Nam", "Vietnam"]),
    ("ZA", ["South Africa", "南非", "Südafrika", "Afrique du Sud", "Sudáfrica"]),
];
