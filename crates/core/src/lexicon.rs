//! Word lists backing the sentiment classifier.
//!
//! Valences sit on a -4..4 scale. Words are lower-case, emoji are stored
//! without the U+FE0F variation selector.

pub(crate) const VALENCES: &[(&str, f64)] = &[
    // Praise and enjoyment
    ("love", 3.2),
    ("loved", 2.9),
    ("loves", 2.7),
    ("loving", 2.9),
    ("lovely", 2.8),
    ("like", 1.5),
    ("liked", 1.8),
    ("likes", 1.8),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("enjoying", 2.4),
    ("good", 1.9),
    ("great", 3.1),
    ("greatest", 3.2),
    ("best", 3.2),
    ("better", 1.9),
    ("nice", 1.8),
    ("cool", 1.3),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("excellent", 2.7),
    ("fantastic", 2.6),
    ("wonderful", 2.7),
    ("brilliant", 2.8),
    ("incredible", 2.2),
    ("perfect", 2.7),
    ("perfectly", 2.4),
    ("beautiful", 2.9),
    ("beautifully", 2.7),
    ("gorgeous", 3.0),
    ("masterpiece", 3.0),
    ("epic", 1.8),
    ("legend", 1.8),
    ("legendary", 2.2),
    ("favorite", 2.0),
    ("favourite", 2.0),
    ("fun", 2.3),
    ("funny", 1.9),
    ("hilarious", 1.7),
    ("lol", 1.8),
    ("lmao", 2.0),
    ("haha", 2.0),
    ("hahaha", 2.3),
    ("wow", 2.8),
    ("happy", 2.7),
    ("glad", 2.0),
    ("excited", 1.4),
    ("cute", 2.0),
    ("sweet", 2.0),
    ("thanks", 1.9),
    ("thank", 1.5),
    ("thx", 1.5),
    ("appreciate", 1.7),
    ("appreciated", 2.3),
    ("helpful", 1.8),
    ("useful", 1.9),
    ("informative", 1.7),
    ("recommend", 1.5),
    ("genius", 1.9),
    ("smart", 1.7),
    ("talented", 2.3),
    ("inspiring", 2.5),
    ("inspired", 2.2),
    ("blessed", 2.9),
    ("proud", 2.1),
    ("hope", 1.9),
    ("peace", 2.5),
    ("win", 2.8),
    ("wins", 2.7),
    ("agree", 1.5),
    ("yes", 1.7),
    ("congrats", 2.4),
    ("congratulations", 2.9),
    ("underrated", 1.0),
    ("goat", 1.5),
    ("fire", 1.2),
    ("banger", 2.0),
    ("wholesome", 2.3),
    ("clear", 1.2),
    ("fair", 1.3),
    ("easy", 1.9),
    ("safe", 1.9),
    ("ok", 1.2),
    ("okay", 0.9),
    // Dislike and hostility
    ("hate", -2.7),
    ("hated", -3.2),
    ("hates", -1.9),
    ("dislike", -1.6),
    ("bad", -2.5),
    ("worse", -2.1),
    ("worst", -3.1),
    ("terrible", -2.1),
    ("awful", -2.0),
    ("horrible", -2.5),
    ("poor", -2.1),
    ("boring", -1.3),
    ("bored", -1.1),
    ("stupid", -2.4),
    ("dumb", -2.3),
    ("idiot", -2.3),
    ("trash", -1.8),
    ("garbage", -1.9),
    ("sucks", -1.5),
    ("suck", -1.9),
    ("lame", -1.8),
    ("cringe", -1.5),
    ("clickbait", -1.5),
    ("fake", -2.0),
    ("lie", -1.6),
    ("lies", -1.8),
    ("liar", -2.5),
    ("scam", -2.4),
    ("waste", -1.8),
    ("wasted", -2.2),
    ("useless", -1.8),
    ("nonsense", -1.7),
    ("ridiculous", -1.9),
    ("annoying", -1.7),
    ("annoyed", -1.6),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disgusting", -2.4),
    ("ugly", -2.3),
    ("wrong", -2.1),
    ("broken", -2.1),
    ("toxic", -2.4),
    ("evil", -3.4),
    ("sad", -2.1),
    ("angry", -2.3),
    ("mad", -2.2),
    ("cry", -2.1),
    ("crying", -2.1),
    ("hurt", -2.4),
    ("pain", -2.3),
    ("fear", -2.2),
    ("scary", -2.2),
    ("problem", -1.7),
    ("problems", -1.7),
    ("fail", -2.5),
    ("failed", -2.3),
    ("unfortunately", -1.6),
    ("kill", -3.7),
    ("killed", -3.5),
    ("die", -2.9),
    ("dead", -3.3),
    ("hell", -3.6),
    ("damn", -1.7),
    ("wtf", -2.8),
    ("shit", -2.6),
    ("crap", -1.6),
    ("ugh", -1.8),
    ("meh", -0.3),
    // Emoji
    ("❤", 3.0),
    ("♥", 3.0),
    ("💕", 2.9),
    ("💖", 2.9),
    ("😍", 2.9),
    ("🥰", 2.9),
    ("😘", 2.3),
    ("😊", 2.5),
    ("😀", 2.0),
    ("😃", 2.2),
    ("😄", 2.2),
    ("😁", 2.0),
    ("😂", 1.8),
    ("🤣", 1.8),
    ("👍", 1.9),
    ("👏", 2.0),
    ("🙌", 2.0),
    ("🔥", 1.5),
    ("💯", 1.5),
    ("🙏", 1.0),
    ("😭", -0.8),
    ("😢", -2.0),
    ("😞", -2.2),
    ("😒", -1.5),
    ("🙄", -1.2),
    ("😠", -2.6),
    ("😡", -3.0),
    ("🤬", -3.2),
    ("🤮", -2.5),
    ("💩", -1.5),
    ("👎", -1.9),
];

/// Intensity modifiers applied to the following sentiment word
pub(crate) const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", 0.293),
    ("amazingly", 0.293),
    ("completely", 0.293),
    ("deeply", 0.293),
    ("especially", 0.293),
    ("extremely", 0.293),
    ("highly", 0.293),
    ("hugely", 0.293),
    ("incredibly", 0.293),
    ("insanely", 0.293),
    ("most", 0.293),
    ("more", 0.293),
    ("really", 0.293),
    ("so", 0.293),
    ("super", 0.293),
    ("totally", 0.293),
    ("truly", 0.293),
    ("very", 0.293),
    ("almost", -0.293),
    ("barely", -0.293),
    ("hardly", -0.293),
    ("kinda", -0.293),
    ("less", -0.293),
    ("marginally", -0.293),
    ("partly", -0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
    ("sorta", -0.293),
];

pub(crate) const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "nothing", "nobody", "neither", "nor", "nowhere", "without",
    "cannot", "cant", "dont", "doesnt", "didnt", "isnt", "arent", "wasnt", "werent", "wont",
    "wouldnt", "shouldnt", "couldnt", "havent", "hasnt", "hadnt", "aint",
];
