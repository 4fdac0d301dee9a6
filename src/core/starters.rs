//! Conversation starters offered before the first message.

/// Selecting a starter sends it exactly as if the user had typed it.
pub const CONVERSATION_STARTERS: &[&str] = &[
    "I've been feeling really low today.",
    "I can't focus on anything right now.",
    "I feel so anxious about tomorrow.",
    "I don't think I'm good enough.",
    "I had a fight with a close friend.",
    "I can't sleep at night.",
    "I feel so alone.",
    "Nothing excites me anymore.",
    "I'm overwhelmed with everything I have to do.",
    "Sometimes I wonder if things will ever get better.",
    "Hi, how are you?",
    "Hello, I need someone to talk to.",
    "I'm having a panic attack.",
    "I feel like I'm failing at everything.",
    "My parents don't understand me.",
    "I'm scared about my future.",
    "I can't stop worrying.",
    "I feel disconnected from everyone.",
    "I'm struggling with my studies.",
    "I feel like giving up.",
    "I'm having relationship problems.",
    "I feel worthless.",
    "I can't make decisions.",
    "I'm always tired.",
    "I feel like I'm not normal.",
    "I'm scared of social situations.",
    "I feel like I'm disappointing everyone.",
    "I can't handle stress anymore.",
    "I feel like I'm going crazy.",
    "I'm having trouble eating.",
    "I feel like I'm stuck in life.",
    "I'm scared of being judged.",
    "I feel like I don't belong anywhere.",
    "I'm having family issues.",
    "I feel like I'm a burden to others.",
    "I can't stop overthinking.",
    "I feel like I'm losing control.",
    "I'm scared of making mistakes.",
    "I feel like I'm not good enough for anyone.",
    "I'm having trouble with my self-esteem.",
    "I feel like I'm wasting my life.",
    "I'm scared of the future.",
    "I feel like I'm always messing up.",
    "I can't seem to be happy.",
    "I feel like I'm invisible.",
    "I'm having trouble trusting people.",
    "I feel like I'm a failure.",
    "I'm scared of being alone.",
    "I feel like I'm not living up to expectations.",
    "I can't seem to find motivation.",
    "I feel like I'm broken.",
    "I'm having trouble with my identity.",
    "I feel like I'm not worthy of love.",
    "I'm scared of change.",
    "I feel like I'm stuck in a rut.",
    "I can't seem to find my purpose.",
    "I feel like I'm disappointing myself.",
    "I'm having trouble with my emotions.",
    "I feel like I'm not strong enough.",
    "I'm scared of being vulnerable.",
    "I feel like I'm losing myself.",
];
