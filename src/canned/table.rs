pub(super) const GREETINGS: &[&str] = &[
    "Hello! I'm Gemini AI, your intelligent assistant. How can I help you today? 😊",
    "Hi there! Ready to explore ideas and answer your questions.",
    "Welcome! I'm here to help. Let's begin!",
];

pub(super) const QUESTIONS: &[&str] = &[
    "That's a great question. Let me explain clearly...",
    "Nice question — here's the breakdown...",
    "Good thinking. Here's what you should know...",
];

pub(super) const CODING: &[&str] = &[
    "Let's look at a clean coding solution...",
    "Here’s a clear and efficient approach...",
    "I'll explain this step by step...",
];

pub(super) const CREATIVE: &[&str] = &[
    "Love this idea! Here's something creative...",
    "Let's get imaginative...",
    "Here's a creative take on that...",
];

pub(super) const GENERAL: &[&str] = &[
    "Here’s a clear explanation...",
    "Let me explain that simply...",
    "Here’s what you need to know...",
];

pub(super) const SUGGESTIONS: &[&str] = &[
    "Explain quantum computing like I'm 10",
    "How do neural networks learn?",
    "Write a short poem about AI",
    "Explain relativity simply",
];

pub(super) const GREETING_KEYWORDS: &[&str] = &["hi", "hello", "hey"];
pub(super) const CODING_KEYWORDS: &[&str] = &["code", "python", "javascript"];
pub(super) const CREATIVE_KEYWORDS: &[&str] = &["story", "poem", "write"];
