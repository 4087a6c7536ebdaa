//! Exam and study stress.

use super::Table;
use crate::types::AgeGroup;

pub(super) fn table(age: AgeGroup) -> Table {
    match age {
        AgeGroup::Teen => TEEN,
        AgeGroup::YoungAdult => YOUNG_ADULT,
        AgeGroup::Adult => ADULT,
        AgeGroup::Senior => SENIOR,
    }
}

const TEEN: Table = &[
    (
        "Oh sweetheart, exams can feel so overwhelming, can't they? 🌸 I can hear the worry in your words. Take a deep breath with me... in through your nose... and out through your mouth. One test, one grade, none of it decides who you are. Which subject is worrying you the most?",
        &[
            "🌸 Take short 5-minute breaks every 25 minutes - your brain needs rest",
            "🥗 Don't skip meals - your brain needs fuel",
            "😴 Sleep is more important than one more hour of cramming",
            "📱 Put your phone in another room while you study",
            "💝 You're doing better than you think you are",
        ],
    ),
    (
        "Hey, I'm really glad you told me. 💫 School pressure is real, and it's okay that this feels big right now. A bad result is one moment, not your whole story. Do you want to talk through what happened, or make a small plan for the next step together?",
        &[
            "📝 Write down the three topics that scare you most, then pick just one",
            "👩‍🏫 Ask a teacher for help - they actually want you to",
            "🎧 Study with calm music and short sprints",
            "🍎 Keep water and a snack on your desk",
            "🌙 Stop studying an hour before bed so your mind can settle",
        ],
    ),
];

const YOUNG_ADULT: Table = &[
    (
        "Exams can take over everything, can't they? 🌸 I can feel how much pressure you're carrying. Let's slow down for a moment and breathe together. Your effort and growth matter far more than any single mark. What's weighing on you most - the material, the time, or what the result might mean?",
        &[
            "⏱️ Try the Pomodoro method: 25 minutes of focus, 5 minutes of rest",
            "📚 Study with a friend and explain topics to each other",
            "🍵 Swap the fourth coffee for water or chamomile tea",
            "😴 Protect your sleep - memory consolidates while you rest",
            "💝 One exam doesn't define your future",
        ],
    ),
    (
        "I hear you, and it makes sense to feel shaken. 💫 Academic setbacks hurt, especially when you've put so much in. Remember that many paths lead to where you want to go. Would it help to look at what you can still change before the next deadline?",
        &[
            "🗓️ Break revision into small daily goals on a calendar",
            "🧑‍🏫 Book time with a tutor or professor during office hours",
            "🚶 Take a short walk between study blocks",
            "🥗 Eat real meals - your brain runs on them",
            "🌈 Be as kind to yourself as you would be to a friend",
        ],
    ),
];

const ADULT: Table = &[
    (
        "Taking exams as an adult, on top of everything else life asks of you, is a lot. 🌸 I can hear the strain in your words. Let's take one slow breath together. Choosing to keep learning is already something to be proud of. Which part of the preparation feels hardest right now?",
        &[
            "🗓️ Block fixed study windows and guard them like meetings",
            "📝 Use practice questions rather than re-reading notes",
            "👪 Let the people around you know when you need quiet time",
            "😴 A rested mind recalls more than a tired one",
            "💝 Your worth is not measured by a score",
        ],
    ),
    (
        "It's hard when a result doesn't match the work you put in. 💫 That disappointment is valid. Give yourself a moment before deciding what it means. Often a setback shows us exactly where to focus next. What would feel like a manageable first step?",
        &[
            "🔍 Review the feedback calmly, one section at a time",
            "📚 Adjust your study plan around your real schedule",
            "🤝 Find a study partner or online group for accountability",
            "🍵 Take a proper break before starting again",
            "🌱 Growth counts, even when the grade doesn't show it yet",
        ],
    ),
];

const SENIOR: Table = &[
    (
        "How wonderful that you're still learning and testing yourself - and how natural to feel nervous about it. 🌸 Let's breathe slowly together for a moment. Your experience is a real strength here. What is the exam for, and what part worries you most?",
        &[
            "📖 Review in short, regular sessions rather than long ones",
            "✍️ Write key points by hand - it helps them stick",
            "☕ Study at the time of day when you feel most alert",
            "🚶 A gentle walk before studying can clear the mind",
            "💝 Curiosity at any age is something to be proud of",
        ],
    ),
    (
        "Tests can stir up old nerves, no matter how much life we've lived. 💫 It's completely understandable. You've handled many challenges before, and you can approach this one at your own pace. Would you like to talk through how you're preparing?",
        &[
            "🗓️ Plan a little each day instead of a lot at once",
            "👥 Ask a family member or friend to quiz you",
            "🍵 Keep a warm drink nearby and take unhurried breaks",
            "😴 Rest well the night before",
            "🌈 Whatever the result, the learning stays with you",
        ],
    ),
];
