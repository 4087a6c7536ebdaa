//! Sadness and loneliness.
//!
//! Two reasons: `general` for a plain sadness word, `negated` for a negated
//! happiness word ("I'm not happy").

use super::Table;
use crate::types::AgeGroup;

pub(super) fn general(age: AgeGroup) -> Table {
    match age {
        AgeGroup::Teen => TEEN,
        AgeGroup::YoungAdult => YOUNG_ADULT,
        AgeGroup::Adult => ADULT,
        AgeGroup::Senior => SENIOR,
    }
}

pub(super) fn negated(age: AgeGroup) -> Table {
    match age {
        AgeGroup::Teen => TEEN_NEGATED,
        AgeGroup::YoungAdult => YOUNG_ADULT_NEGATED,
        AgeGroup::Adult => ADULT_NEGATED,
        AgeGroup::Senior => SENIOR_NEGATED,
    }
}

const TEEN: Table = &[
    (
        "Oh sweetie, come here. 🤗 I'm so sorry you're feeling this way. It's okay to feel sad, and it's okay to cry. Feelings are like clouds - they come and go. You're not alone, even when it feels that way. Do you want to tell me what's going on?",
        &[
            "🎵 Put on some soft music and just rest for a while",
            "🛋️ Wrap yourself in a cozy blanket - comfort helps",
            "📞 Text a friend or someone in your family who cares about you",
            "🧑‍🏫 A school counsellor is there for exactly this",
            "💕 Be gentle with yourself today",
        ],
    ),
    (
        "I'm right here, and I'm listening. 💫 Feeling lonely or hurt at your age can be so confusing, and it doesn't mean anything is wrong with you. Whatever happened, you matter. What's been making today hard?",
        &[
            "✍️ Write your feelings down, even if it's messy",
            "🌱 Step outside for just 5 minutes of fresh air",
            "🐾 Spend time with a pet or something that makes you smile",
            "📵 Take a break from social media if it's making things worse",
            "💝 Tell one trusted adult how you've been feeling",
        ],
    ),
];

const YOUNG_ADULT: Table = &[
    (
        "Oh love, I'm so sorry you're carrying this. 🤗 It's okay to feel sad, and it's okay to cry. So much changes in these years, and loneliness can sneak up on us. You're not alone right now - I'm here. Would you like to tell me what's making you feel this way?",
        &[
            "🎵 Let yourself rest with some gentle music",
            "📞 Reach out to one friend, even with a short message",
            "🌱 Get some daylight - a short walk can lift the fog",
            "🍲 Make yourself something warm to eat",
            "💕 This feeling will pass, even if it's heavy today",
        ],
    ),
    (
        "I hear how much this hurts. 💫 Sadness is a sign of how deeply you feel, not a weakness. Take things slowly today. What would feel comforting right now?",
        &[
            "🛋️ Give yourself permission to do less today",
            "✍️ Journal what happened and how it felt",
            "🤝 Consider talking to a counsellor - it really can help",
            "🚿 A warm shower can be a small reset",
            "💝 Be as gentle with yourself as you'd be with a friend",
        ],
    ),
];

const ADULT: Table = &[
    (
        "I'm so sorry you're feeling this way. 🤗 Life asks so much of us, and sometimes sadness catches up. It's okay to stop and feel it. You're not alone - I'm right here, listening. Would you like to share what's been weighing on your heart?",
        &[
            "🎵 Make a quiet half hour just for yourself",
            "📞 Call someone who knows you well",
            "🌱 Step outside for fresh air, even briefly",
            "📝 Write down three small things that went okay today",
            "💕 Be gentle with yourself - tomorrow is a new day",
        ],
    ),
    (
        "That sounds really painful. 💫 Heartache and loneliness can feel heavy, especially when everyone expects you to keep going. You're allowed to pause. What's been the hardest part?",
        &[
            "🛋️ Let go of one non-essential task today",
            "🤝 Talking to a therapist is a sign of strength",
            "🚶 A slow walk can help your thoughts settle",
            "🍵 Make yourself something warm and comforting",
            "💝 Your feelings are valid, all of them",
        ],
    ),
];

const SENIOR: Table = &[
    (
        "I'm so sorry you're feeling low. 🤗 Sadness and loneliness can visit at any age, and they deserve to be heard. I'm here with you. Would you like to tell me what's been on your mind?",
        &[
            "📞 Call a family member or old friend for a chat",
            "🌷 Spend a little time in the garden or by a window with sunlight",
            "🎵 Play music that brings back warm memories",
            "👥 Local community groups can be a lovely source of company",
            "💕 Be gentle with yourself today",
        ],
    ),
    (
        "It takes courage to say you're hurting. 💫 Losses and changes pile up over the years, and it's natural to grieve them. You don't have to carry this alone. What has been hardest lately?",
        &[
            "📖 Look through photos of happy times, if that feels comforting",
            "🍵 Share a cup of tea with a neighbour or friend",
            "🚶 A short, gentle walk can lift the spirit",
            "🤝 Speak with your doctor if the sadness lingers",
            "💝 You matter, and your feelings matter",
        ],
    ),
];

const TEEN_NEGATED: Table = &[
    (
        "Thanks for being honest that you're not feeling happy. 💫 That takes guts. You don't have to pretend to be okay, not with me. Do you know what's been bringing you down, or is it more of a general heavy feeling?",
        &[
            "✍️ Try naming the feeling - sad, bored, stressed, lonely?",
            "🎵 Listen to a song that matches your mood, then one that lifts it",
            "🌱 Get outside for a few minutes",
            "📞 Message a friend just to say hi",
            "💕 Not feeling happy today is okay - it won't last forever",
        ],
    ),
    (
        "I'm sorry things don't feel good right now. 🤗 Sometimes happiness feels far away, and that's a hard place to be. I'm here to listen. What would make today even a tiny bit better?",
        &[
            "🛋️ Rest without feeling guilty about it",
            "🐾 Do something small you used to enjoy",
            "🧑‍🏫 Talk to a counsellor or trusted adult",
            "📵 Give yourself a break from comparing on social media",
            "💝 You deserve to feel good again, and you will",
        ],
    ),
];

const YOUNG_ADULT_NEGATED: Table = &[
    (
        "I hear you - not feeling happy can be its own quiet kind of heavy. 💫 You don't need a big reason for it to count. Let's sit with it together. Has something changed recently, or has this been building for a while?",
        &[
            "✍️ Jot down when the feeling is strongest during the day",
            "🌱 Move your body a little - a walk, a stretch",
            "📞 Reach out to someone you haven't talked to in a while",
            "🍲 Keep regular meals and sleep, even when it's hard",
            "💕 This season will change",
        ],
    ),
    (
        "Thank you for telling me you're not okay. 🤗 It's brave to say it out loud. You don't have to fix everything today. What's one thing that usually helps you feel a bit more like yourself?",
        &[
            "🎵 Make a playlist for gentle days",
            "🤝 Consider speaking to a counsellor",
            "☀️ Get some morning daylight",
            "🛋️ Lower the bar for today - small wins count",
            "💝 Be kind to yourself",
        ],
    ),
];

const ADULT_NEGATED: Table = &[
    (
        "I'm sorry you're not feeling happy. 💫 So often we keep going for everyone else and forget to check in with ourselves. I'm glad you did. What's been taking the joy out of things lately?",
        &[
            "📝 Write down what's been draining you this week",
            "🌿 Schedule one small thing just for you",
            "📞 Talk to a friend who really listens",
            "😴 Check in on your sleep - it shapes our mood more than we think",
            "💕 Feeling flat doesn't mean you're failing",
        ],
    ),
    (
        "Not feeling happy is a signal worth listening to. 🤗 You don't have to push it away. Let's take it gently. Is this more about your circumstances, or a feeling that's hard to explain?",
        &[
            "🚶 Take a walk without your phone",
            "🤝 A therapist can help untangle feelings like this",
            "🍵 Slow down with a warm drink and a few deep breaths",
            "🛋️ Cancel one obligation you don't truly need",
            "💝 You deserve care too",
        ],
    ),
];

const SENIOR_NEGATED: Table = &[
    (
        "I'm sorry you're not feeling happy. 💫 It's good that you said it - those feelings deserve attention at every age. I'm here with you. Has something been troubling you, or is it a general heaviness?",
        &[
            "📞 Call someone who always lifts your spirits",
            "🌷 Spend time near plants, sunlight, or fresh air",
            "🎵 Put on music you've loved for years",
            "👥 Join a group or class - company helps",
            "💕 Brighter days are still ahead",
        ],
    ),
    (
        "Thank you for sharing that with me. 🤗 When happiness feels distant, simple comforts and good company can help bring it back. What used to bring you joy that we might make a little room for?",
        &[
            "📖 Revisit a favourite book or hobby",
            "🍵 Invite a friend or neighbour for tea",
            "🚶 A gentle stroll can brighten the mood",
            "🤝 Mention how you're feeling to your doctor if it lingers",
            "💝 You are valued and loved",
        ],
    ),
];
