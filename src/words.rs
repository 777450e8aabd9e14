use std::{fs, path::Path};

use rand::{seq::SliceRandom, Rng};

use crate::error::WordListError;
use crate::trie::PrefixTrie;

const BUILTIN_WORDS: &str = "
ABOUT ABOVE ACTOR ADOPT ADULT AFTER AGAIN AGENT AGREE AHEAD ALARM ALBUM ALERT
ALIKE ALIVE ALLOW ALONE ALONG ALTER AMONG ANGER ANGLE ANGRY APART APPLE APPLY
ARENA ARGUE ARISE ARRAY ASIDE ASSET AUDIO AVOID AWARD AWARE BADGE BAKER BASIC
BEACH BEGIN BEING BELOW BENCH BIRTH BLACK BLADE BLAME BLANK BLAST BLEND BLIND
BLOCK BLOOD BOARD BOOST BRAIN BRAND BRAVE BREAD BREAK BRICK BRIEF BRING BROAD
BROWN BRUSH BUILD BUNCH BURST CABIN CABLE CANDY CARGO CARRY CATCH CAUSE CHAIN
CHAIR CHALK CHARM CHART CHASE CHEAP CHECK CHEST CHIEF CHILD CHOIR CLAIM CLASS
CLEAN CLEAR CLIMB CLOCK CLOSE CLOUD COACH COAST COUNT COURT COVER CRAFT CRANE
CRANK CRASH CRAZY CREAM CRISP CROSS CROWD CROWN CRUSH CURVE CYCLE DAILY DANCE
DEALT DELAY DEPTH DIARY DOUBT DOZEN DRAFT DRAMA DREAM DRESS DRINK DRIVE EAGER
EARLY EARTH EIGHT ELBOW EMPTY ENJOY ENTER EQUAL ERROR EVENT EXACT EXIST EXTRA
FAITH FALSE FANCY FEAST FIELD FIGHT FINAL FLAME FLASH FLOOR FLUTE FOCUS FORCE
FRAME FRESH FRONT FROST FRUIT FUNNY GHOST GIANT GLASS GLOBE GRACE GRADE GRAIN
GRAND GRANT GRAPE GRASS GREAT GREEN GROUP GUARD GUESS GUEST GUIDE HAPPY HEART
HEAVY HONEY HORSE HOTEL HOUSE HUMAN HUMOR IDEAL IMAGE INDEX INNER INPUT ISSUE
JEWEL JOINT JUDGE JUICE KNIFE KNOCK LABEL LARGE LASER LAUGH LAYER LEARN LEMON
LEVEL LIGHT LIMIT LOCAL LOGIC LUCKY LUNCH MAGIC MAJOR MAPLE MARCH MATCH MAYOR
MEDAL MERCY METAL MIGHT MINOR MODEL MONEY MONTH MOUNT MOUSE MOUTH MOVIE MUSIC
NERVE NEVER NIGHT NOISE NORTH NOVEL NURSE OCEAN OFFER OLIVE ONION OPERA ORBIT
ORDER OTHER OUTER OWNER PAINT PANEL PAPER PARTY PASTA PATCH PEACE PEARL PHASE
PHONE PIANO PIECE PILOT PITCH PIZZA PLACE PLAIN PLANE PLANT PLATE POINT POWER
PRESS PRICE PRIDE PRIME PRIZE PROOF PROUD QUEEN QUICK QUIET QUOTE RADIO RAISE
RANGE RAPID RATIO REACH READY RELAX REPLY RIDER RIDGE RIGHT RIVER ROBOT ROUGH
ROUND ROUTE ROYAL RURAL SALAD SAUCE SCALE SCENE SCORE SENSE SERVE SEVEN SHADE
SHAPE SHARE SHARP SHEEP SHELF SHELL SHIFT SHINE SHIRT SHOCK SHORE SHORT SIGHT
SKILL SLEEP SLICE SLIDE SMALL SMART SMILE SMOKE SNAKE SOLID SOLVE SOUND SOUTH
SPACE SPARE SPEAK SPEED SPEND SPICE SPOON SPORT STAFF STAGE STAIR STAND START
STATE STEAM STEEL STICK STILL STONE STORE STORM STORY STOVE STUDY STYLE SUGAR
SUNNY SWEET SWING TABLE TASTE TEACH THEME THICK THING THINK THREE THROW TIGER
TIGHT TIMER TITLE TOAST TODAY TOOTH TOPIC TOTAL TOUCH TOUGH TOWER TRACK TRADE
TRAIL TRAIN TREAT TREND TRIAL TRICK TRUCK TRUST TRUTH TWIST UNCLE UNDER UNION
UNITY UNTIL UPPER UPSET URBAN USUAL VALUE VIDEO VISIT VITAL VOICE WASTE WATCH
WATER WHALE WHEAT WHEEL WHITE WHOLE WOMAN WORLD WORRY WORTH WRITE YOUNG YOUTH
ZEBRA
";

/// An ordered list of upper-case words.
#[derive(Clone, Debug)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn builtin() -> Self {
        WordList { words: BUILTIN_WORDS.split_whitespace().map(String::from).collect() }
    }

    /// Reads whitespace separated words, upper-casing them. Lines starting
    /// with `#` are comments.
    pub fn parse(text: &str) -> Result<Self, WordListError> {
        let mut words = vec![];

        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.starts_with('#') {
                continue;
            }

            for word in line.split_whitespace() {
                let upper = word.to_ascii_uppercase();
                if !upper.chars().all(|ch| ch.is_ascii_uppercase()) {
                    return Err(WordListError::InvalidWord { line: i + 1, word: word.to_string() });
                }
                words.push(upper);
            }
        }

        if words.is_empty() {
            return Err(WordListError::Empty);
        }

        Ok(WordList { words })
    }

    pub fn load(path: &Path) -> Result<Self, WordListError> {
        let text = fs::read_to_string(path)
            .map_err(|source| WordListError::Io { path: path.to_path_buf(), source })?;
        Self::parse(&text)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }
}

/// Target words plus the prefix dictionary used to judge pickups.
#[derive(Clone, Debug)]
pub struct Lexicon {
    targets: WordList,
    trie: PrefixTrie,
}

impl Lexicon {
    /// Every target is a dictionary word; `allowed` adds words that may be
    /// spelled as guesses but are never picked as targets.
    pub fn new(targets: WordList, allowed: Option<&WordList>) -> Self {
        let mut trie = PrefixTrie::from_words(targets.words());
        if let Some(allowed) = allowed {
            for word in allowed.words() {
                trie.insert(word);
            }
        }
        Lexicon { targets, trie }
    }

    pub fn builtin() -> Self {
        Lexicon::new(WordList::builtin(), None)
    }

    pub fn targets(&self) -> &WordList {
        &self.targets
    }

    pub fn trie(&self) -> &PrefixTrie {
        &self.trie
    }

    pub fn choose_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str, WordListError> {
        self.targets.choose(rng).ok_or(WordListError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn builtin_list_is_five_letter_words() {
        let list = WordList::parse(BUILTIN_WORDS).unwrap();
        assert!(list.len() > 300);
        for word in list.words() {
            assert_eq!(word.len(), 5, "{}", word);
        }
        assert_eq!(WordList::builtin().words(), list.words());
    }

    #[test]
    fn parse_uppercases_and_skips_comments() {
        let list = WordList::parse("# targets\ncrane  Crisp\n\n  bloat\n").unwrap();
        assert_eq!(list.words(), ["CRANE", "CRISP", "BLOAT"]);
    }

    #[test]
    fn parse_rejects_non_letters() {
        match WordList::parse("CRANE\nCR4NE\n") {
            Err(WordListError::InvalidWord { line, word }) => {
                assert_eq!(line, 2);
                assert_eq!(word, "CR4NE");
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(WordList::parse("# nothing\n"), Err(WordListError::Empty)));
    }

    #[test]
    fn targets_come_from_the_target_list() {
        let targets = WordList::parse("CRANE CRISP").unwrap();
        let allowed = WordList::parse("BLOAT").unwrap();
        let lexicon = Lexicon::new(targets, Some(&allowed));
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let target = lexicon.choose_target(&mut rng).unwrap();
            assert!(target == "CRANE" || target == "CRISP");
        }
        assert!(lexicon.trie().contains_word("BLOAT"));
        assert!(lexicon.trie().contains_word("CRISP"));
    }
}
