//! # Built-In Source Table

use crate::builtin::BuiltinEmoji;

/// The built-in emoji source list, in registration order.
#[rustfmt::skip]
pub const BUILTIN_EMOJI: &[BuiltinEmoji] = &[
    BuiltinEmoji::new("😄", &["smile"], "smiling face with open mouth and smiling eyes"),
    BuiltinEmoji::new("😃", &["smiley"], "smiling face with open mouth"),
    BuiltinEmoji::new("😀", &["grinning"], "grinning face"),
    BuiltinEmoji::new("😁", &["grin"], "grinning face with smiling eyes"),
    BuiltinEmoji::new("😆", &["laughing", "satisfied"], "smiling face with open mouth and tightly-closed eyes"),
    BuiltinEmoji::new("😅", &["sweat_smile"], "smiling face with open mouth and cold sweat"),
    BuiltinEmoji::new("😂", &["joy"], "face with tears of joy"),
    BuiltinEmoji::new("🤣", &["rofl", "rolling_on_the_floor_laughing"], "rolling on the floor laughing"),
    BuiltinEmoji::new("😊", &["blush"], "smiling face with smiling eyes"),
    BuiltinEmoji::new("😇", &["innocent"], "smiling face with halo"),
    BuiltinEmoji::new("🙂", &["slightly_smiling_face"], "slightly smiling face"),
    BuiltinEmoji::new("🙃", &["upside_down_face"], "upside-down face"),
    BuiltinEmoji::new("😉", &["wink"], "winking face"),
    BuiltinEmoji::new("😌", &["relieved"], "relieved face"),
    BuiltinEmoji::new("😍", &["heart_eyes"], "smiling face with heart-shaped eyes"),
    BuiltinEmoji::new("😘", &["kissing_heart"], "face throwing a kiss"),
    BuiltinEmoji::new("😋", &["yum"], "face savouring delicious food"),
    BuiltinEmoji::new("😛", &["stuck_out_tongue"], "face with stuck-out tongue"),
    BuiltinEmoji::new("😜", &["stuck_out_tongue_winking_eye"], "face with stuck-out tongue and winking eye"),
    BuiltinEmoji::new("😎", &["sunglasses"], "smiling face with sunglasses"),
    BuiltinEmoji::new("🤓", &["nerd_face"], "nerd face"),
    BuiltinEmoji::new("🤔", &["thinking"], "thinking face"),
    BuiltinEmoji::new("😐", &["neutral_face"], "neutral face"),
    BuiltinEmoji::new("😑", &["expressionless"], "expressionless face"),
    BuiltinEmoji::new("😒", &["unamused"], "unamused face"),
    BuiltinEmoji::new("🙄", &["roll_eyes"], "face with rolling eyes"),
    BuiltinEmoji::new("😬", &["grimacing"], "grimacing face"),
    BuiltinEmoji::new("😔", &["pensive"], "pensive face"),
    BuiltinEmoji::new("😪", &["sleepy"], "sleepy face"),
    BuiltinEmoji::new("😴", &["sleeping"], "sleeping face"),
    BuiltinEmoji::new("😷", &["mask"], "face with medical mask"),
    BuiltinEmoji::new("😵", &["dizzy_face"], "dizzy face"),
    BuiltinEmoji::new("🤠", &["cowboy_hat_face"], "face with cowboy hat"),
    BuiltinEmoji::new("🥳", &["partying_face"], "face with party horn and party hat"),
    BuiltinEmoji::new("😕", &["confused"], "confused face"),
    BuiltinEmoji::new("😟", &["worried"], "worried face"),
    BuiltinEmoji::new("😮", &["open_mouth"], "face with open mouth"),
    BuiltinEmoji::new("😲", &["astonished"], "astonished face"),
    BuiltinEmoji::new("😳", &["flushed"], "flushed face"),
    BuiltinEmoji::new("🥺", &["pleading_face"], "face with pleading eyes"),
    BuiltinEmoji::new("😨", &["fearful"], "fearful face"),
    BuiltinEmoji::new("😰", &["cold_sweat"], "face with open mouth and cold sweat"),
    BuiltinEmoji::new("😢", &["cry"], "crying face"),
    BuiltinEmoji::new("😭", &["sob"], "loudly crying face"),
    BuiltinEmoji::new("😱", &["scream"], "face screaming in fear"),
    BuiltinEmoji::new("😖", &["confounded"], "confounded face"),
    BuiltinEmoji::new("😞", &["disappointed"], "disappointed face"),
    BuiltinEmoji::new("😓", &["sweat"], "face with cold sweat"),
    BuiltinEmoji::new("😩", &["weary"], "weary face"),
    BuiltinEmoji::new("😫", &["tired_face"], "tired face"),
    BuiltinEmoji::new("😡", &["rage", "pout"], "pouting face"),
    BuiltinEmoji::new("😠", &["angry"], "angry face"),
    BuiltinEmoji::new("😈", &["smiling_imp"], "smiling face with horns"),
    BuiltinEmoji::new("💀", &["skull"], "skull"),
    BuiltinEmoji::new("💩", &["hankey", "poop", "shit"], "pile of poo"),
    BuiltinEmoji::new("🤡", &["clown_face"], "clown face"),
    BuiltinEmoji::new("👻", &["ghost"], "ghost"),
    BuiltinEmoji::new("👽", &["alien"], "extraterrestrial alien"),
    BuiltinEmoji::new("🤖", &["robot"], "robot face"),
    BuiltinEmoji::new("🙈", &["see_no_evil"], "see-no-evil monkey"),
    BuiltinEmoji::new("🙉", &["hear_no_evil"], "hear-no-evil monkey"),
    BuiltinEmoji::new("🙊", &["speak_no_evil"], "speak-no-evil monkey"),
    BuiltinEmoji::new("❤️", &["heart"], "heavy black heart"),
    BuiltinEmoji::new("🧡", &["orange_heart"], "orange heart"),
    BuiltinEmoji::new("💛", &["yellow_heart"], "yellow heart"),
    BuiltinEmoji::new("💚", &["green_heart"], "green heart"),
    BuiltinEmoji::new("💙", &["blue_heart"], "blue heart"),
    BuiltinEmoji::new("💜", &["purple_heart"], "purple heart"),
    BuiltinEmoji::new("🖤", &["black_heart"], "black heart"),
    BuiltinEmoji::new("💔", &["broken_heart"], "broken heart"),
    BuiltinEmoji::new("💕", &["two_hearts"], "two hearts"),
    BuiltinEmoji::new("💖", &["sparkling_heart"], "sparkling heart"),
    BuiltinEmoji::new("💯", &["100"], "hundred points symbol"),
    BuiltinEmoji::new("💥", &["boom", "collision"], "collision symbol"),
    BuiltinEmoji::new("💫", &["dizzy"], "dizzy symbol"),
    BuiltinEmoji::new("💦", &["sweat_drops"], "splashing sweat symbol"),
    BuiltinEmoji::new("💤", &["zzz"], "sleeping symbol"),
    BuiltinEmoji::new("👋", &["wave"], "waving hand sign"),
    BuiltinEmoji::new("✋", &["raised_hand", "hand"], "raised hand"),
    BuiltinEmoji::new("👌", &["ok_hand"], "ok hand sign"),
    BuiltinEmoji::new("✌️", &["v"], "victory hand"),
    BuiltinEmoji::new("🤞", &["crossed_fingers"], "hand with index and middle fingers crossed"),
    BuiltinEmoji::new("☝️", &["point_up"], "white up pointing index"),
    BuiltinEmoji::new("👆", &["point_up_2"], "white up pointing backhand index"),
    BuiltinEmoji::new("👇", &["point_down"], "white down pointing backhand index"),
    BuiltinEmoji::new("👈", &["point_left"], "white left pointing backhand index"),
    BuiltinEmoji::new("👉", &["point_right"], "white right pointing backhand index"),
    BuiltinEmoji::new("👍", &["+1", "thumbsup"], "thumbs up sign"),
    BuiltinEmoji::new("👎", &["-1", "thumbsdown"], "thumbs down sign"),
    BuiltinEmoji::new("✊", &["fist", "fist_raised"], "raised fist"),
    BuiltinEmoji::new("👊", &["punch", "facepunch", "fist_oncoming"], "fisted hand sign"),
    BuiltinEmoji::new("👏", &["clap"], "clapping hands sign"),
    BuiltinEmoji::new("🙌", &["raised_hands"], "person raising both hands in celebration"),
    BuiltinEmoji::new("🙏", &["pray"], "person with folded hands"),
    BuiltinEmoji::new("💪", &["muscle"], "flexed biceps"),
    BuiltinEmoji::new("👀", &["eyes"], "eyes"),
    BuiltinEmoji::new("🧠", &["brain"], "brain"),
    BuiltinEmoji::new("👶", &["baby"], "baby"),
    BuiltinEmoji::new("🐶", &["dog"], "dog face"),
    BuiltinEmoji::new("🐱", &["cat"], "cat face"),
    BuiltinEmoji::new("🐭", &["mouse"], "mouse face"),
    BuiltinEmoji::new("🐰", &["rabbit"], "rabbit face"),
    BuiltinEmoji::new("🦊", &["fox_face"], "fox face"),
    BuiltinEmoji::new("🐻", &["bear"], "bear face"),
    BuiltinEmoji::new("🐼", &["panda_face"], "panda face"),
    BuiltinEmoji::new("🐨", &["koala"], "koala"),
    BuiltinEmoji::new("🐯", &["tiger"], "tiger face"),
    BuiltinEmoji::new("🦁", &["lion"], "lion face"),
    BuiltinEmoji::new("🐮", &["cow"], "cow face"),
    BuiltinEmoji::new("🐷", &["pig"], "pig face"),
    BuiltinEmoji::new("🐸", &["frog"], "frog face"),
    BuiltinEmoji::new("🐵", &["monkey_face"], "monkey face"),
    BuiltinEmoji::new("🐔", &["chicken"], "chicken"),
    BuiltinEmoji::new("🐧", &["penguin"], "penguin"),
    BuiltinEmoji::new("🐦", &["bird"], "bird"),
    BuiltinEmoji::new("🐝", &["bee", "honeybee"], "honeybee"),
    BuiltinEmoji::new("🐛", &["bug"], "bug"),
    BuiltinEmoji::new("🐌", &["snail"], "snail"),
    BuiltinEmoji::new("🐙", &["octopus"], "octopus"),
    BuiltinEmoji::new("🐢", &["turtle"], "turtle"),
    BuiltinEmoji::new("🐍", &["snake"], "snake"),
    BuiltinEmoji::new("🐳", &["whale"], "spouting whale"),
    BuiltinEmoji::new("🐬", &["dolphin", "flipper"], "dolphin"),
    BuiltinEmoji::new("🐠", &["tropical_fish"], "tropical fish"),
    BuiltinEmoji::new("🦄", &["unicorn"], "unicorn face"),
    BuiltinEmoji::new("🌵", &["cactus"], "cactus"),
    BuiltinEmoji::new("🎄", &["christmas_tree"], "christmas tree"),
    BuiltinEmoji::new("🌲", &["evergreen_tree"], "evergreen tree"),
    BuiltinEmoji::new("🌳", &["deciduous_tree"], "deciduous tree"),
    BuiltinEmoji::new("🌴", &["palm_tree"], "palm tree"),
    BuiltinEmoji::new("🌱", &["seedling"], "seedling"),
    BuiltinEmoji::new("🌿", &["herb"], "herb"),
    BuiltinEmoji::new("🍀", &["four_leaf_clover"], "four leaf clover"),
    BuiltinEmoji::new("🍁", &["maple_leaf"], "maple leaf"),
    BuiltinEmoji::new("🍂", &["fallen_leaf"], "fallen leaf"),
    BuiltinEmoji::new("🍄", &["mushroom"], "mushroom"),
    BuiltinEmoji::new("🌹", &["rose"], "rose"),
    BuiltinEmoji::new("🌻", &["sunflower"], "sunflower"),
    BuiltinEmoji::new("☀️", &["sunny"], "black sun with rays"),
    BuiltinEmoji::new("☁️", &["cloud"], "cloud"),
    BuiltinEmoji::new("⚡", &["zap"], "high voltage sign"),
    BuiltinEmoji::new("🔥", &["fire", "flame"], "fire"),
    BuiltinEmoji::new("❄️", &["snowflake"], "snowflake"),
    BuiltinEmoji::new("⛄", &["snowman"], "snowman without snow"),
    BuiltinEmoji::new("🌈", &["rainbow"], "rainbow"),
    BuiltinEmoji::new("🌊", &["ocean"], "water wave"),
    BuiltinEmoji::new("⭐", &["star"], "white medium star"),
    BuiltinEmoji::new("🌟", &["star2"], "glowing star"),
    BuiltinEmoji::new("✨", &["sparkles"], "sparkles"),
    BuiltinEmoji::new("🌙", &["crescent_moon"], "crescent moon"),
    BuiltinEmoji::new("🌎", &["earth_americas"], "earth globe americas"),
    BuiltinEmoji::new("🍎", &["apple"], "red apple"),
    BuiltinEmoji::new("🍌", &["banana"], "banana"),
    BuiltinEmoji::new("🍕", &["pizza"], "slice of pizza"),
    BuiltinEmoji::new("🍔", &["hamburger"], "hamburger"),
    BuiltinEmoji::new("🍟", &["fries"], "french fries"),
    BuiltinEmoji::new("🌮", &["taco"], "taco"),
    BuiltinEmoji::new("☕", &["coffee"], "hot beverage"),
    BuiltinEmoji::new("🍺", &["beer"], "beer mug"),
    BuiltinEmoji::new("🍻", &["beers"], "clinking beer mugs"),
    BuiltinEmoji::new("🍷", &["wine_glass"], "wine glass"),
    BuiltinEmoji::new("🍰", &["cake"], "shortcake"),
    BuiltinEmoji::new("🎂", &["birthday"], "birthday cake"),
    BuiltinEmoji::new("🍪", &["cookie"], "cookie"),
    BuiltinEmoji::new("🍩", &["doughnut"], "doughnut"),
    BuiltinEmoji::new("🎉", &["tada"], "party popper"),
    BuiltinEmoji::new("🎈", &["balloon"], "balloon"),
    BuiltinEmoji::new("🎁", &["gift"], "wrapped present"),
    BuiltinEmoji::new("🏆", &["trophy"], "trophy"),
    BuiltinEmoji::new("⚽", &["soccer"], "soccer ball"),
    BuiltinEmoji::new("🏀", &["basketball"], "basketball and hoop"),
    BuiltinEmoji::new("🎮", &["video_game"], "video game"),
    BuiltinEmoji::new("🎵", &["musical_note"], "musical note"),
    BuiltinEmoji::new("🎸", &["guitar"], "guitar"),
    BuiltinEmoji::new("🎨", &["art"], "artist palette"),
    BuiltinEmoji::new("🚗", &["car", "red_car"], "automobile"),
    BuiltinEmoji::new("🚕", &["taxi"], "taxi"),
    BuiltinEmoji::new("🚌", &["bus"], "bus"),
    BuiltinEmoji::new("🚋", &["train"], "tram car"),
    BuiltinEmoji::new("🚲", &["bike"], "bicycle"),
    BuiltinEmoji::new("✈️", &["airplane"], "airplane"),
    BuiltinEmoji::new("🚀", &["rocket"], "rocket"),
    BuiltinEmoji::new("🚢", &["ship"], "ship"),
    BuiltinEmoji::new("⚓", &["anchor"], "anchor"),
    BuiltinEmoji::new("🚧", &["construction"], "construction sign"),
    BuiltinEmoji::new("🚨", &["rotating_light"], "police cars revolving light"),
    BuiltinEmoji::new("🏠", &["house"], "house building"),
    BuiltinEmoji::new("🏢", &["office"], "office building"),
    BuiltinEmoji::new("🏥", &["hospital"], "hospital"),
    BuiltinEmoji::new("⌚", &["watch"], "watch"),
    BuiltinEmoji::new("📱", &["iphone"], "mobile phone"),
    BuiltinEmoji::new("💻", &["computer"], "personal computer"),
    BuiltinEmoji::new("⌨️", &["keyboard"], "keyboard"),
    BuiltinEmoji::new("💡", &["bulb"], "electric light bulb"),
    BuiltinEmoji::new("🔋", &["battery"], "battery"),
    BuiltinEmoji::new("💰", &["moneybag"], "money bag"),
    BuiltinEmoji::new("✉️", &["email", "envelope"], "envelope"),
    BuiltinEmoji::new("📝", &["memo", "pencil"], "memo"),
    BuiltinEmoji::new("📖", &["book", "open_book"], "open book"),
    BuiltinEmoji::new("📆", &["calendar"], "tear-off calendar"),
    BuiltinEmoji::new("📈", &["chart_with_upwards_trend"], "chart with upwards trend"),
    BuiltinEmoji::new("📌", &["pushpin"], "pushpin"),
    BuiltinEmoji::new("📎", &["paperclip"], "paperclip"),
    BuiltinEmoji::new("✂️", &["scissors"], "black scissors"),
    BuiltinEmoji::new("🔒", &["lock"], "lock"),
    BuiltinEmoji::new("🔓", &["unlock"], "open lock"),
    BuiltinEmoji::new("🔑", &["key"], "key"),
    BuiltinEmoji::new("🔨", &["hammer"], "hammer"),
    BuiltinEmoji::new("🔧", &["wrench"], "wrench"),
    BuiltinEmoji::new("⚙️", &["gear"], "gear"),
    BuiltinEmoji::new("🔗", &["link"], "link symbol"),
    BuiltinEmoji::new("🔍", &["mag"], "left-pointing magnifying glass"),
    BuiltinEmoji::new("🔔", &["bell"], "bell"),
    BuiltinEmoji::new("⚠️", &["warning"], "warning sign"),
    BuiltinEmoji::new("⛔", &["no_entry"], "no entry"),
    BuiltinEmoji::new("🚫", &["no_entry_sign"], "no entry sign"),
    BuiltinEmoji::new("❌", &["x"], "cross mark"),
    BuiltinEmoji::new("✔️", &["heavy_check_mark"], "heavy check mark"),
    BuiltinEmoji::new("✅", &["white_check_mark"], "white heavy check mark"),
    BuiltinEmoji::new("❓", &["question"], "black question mark ornament"),
    BuiltinEmoji::new("❗", &["exclamation", "heavy_exclamation_mark"], "heavy exclamation mark symbol"),
    BuiltinEmoji::new("‼️", &["bangbang"], "double exclamation mark"),
    BuiltinEmoji::new("⁉️", &["interrobang"], "exclamation question mark"),
    BuiltinEmoji::new("♻️", &["recycle"], "black universal recycling symbol"),
    BuiltinEmoji::new("🆕", &["new"], "squared new"),
    BuiltinEmoji::new("🆓", &["free"], "squared free"),
    BuiltinEmoji::new("🆗", &["ok"], "squared ok"),
    BuiltinEmoji::new("🆒", &["cool"], "squared cool"),
    BuiltinEmoji::new("🆘", &["sos"], "squared sos"),
    BuiltinEmoji::new("⬆️", &["arrow_up"], "upwards black arrow"),
    BuiltinEmoji::new("⬇️", &["arrow_down"], "downwards black arrow"),
    BuiltinEmoji::new("⬅️", &["arrow_left"], "leftwards black arrow"),
    BuiltinEmoji::new("➡️", &["arrow_right"], "black rightwards arrow"),
    BuiltinEmoji::new("🏁", &["checkered_flag"], "chequered flag"),
    BuiltinEmoji::new("🚩", &["triangular_flag_on_post"], "triangular flag on post"),
    BuiltinEmoji::new("⌛", &["hourglass"], "hourglass"),
    BuiltinEmoji::new("⏰", &["alarm_clock"], "alarm clock"),
    BuiltinEmoji::new("©️", &["copyright"], "copyright sign"),
    BuiltinEmoji::new("®️", &["registered"], "registered sign"),
    BuiltinEmoji::new("™️", &["tm"], "trade mark sign"),
];
