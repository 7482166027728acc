use super::{Category, InputKind, ToolModel, ToolSpec};

/// The registry. Order here is display order.
pub const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        id: "code-fixer",
        name: "Code Error Fixer",
        description: "Analyze and fix code errors instantly with root cause analysis and refactoring suggestions.",
        icon: "👨‍💻",
        placeholder: "Paste your buggy code here...",
        system_instruction: "You are an expert developer. Analyze the code, identify the error, explain the root cause, provide the minimal fix, and suggest refactoring improvements.",
        model: ToolModel::Pro,
        input: InputKind::Code,
        category: Category::Coding,
    },
    ToolSpec {
        id: "email-polisher",
        name: "Email Rewriter",
        description: "Transform casual emails into professional communications with tone adjustment and clarity.",
        icon: "✉️",
        placeholder: "Draft your casual email here...",
        system_instruction: "Rewrite the casual email to be professional, polite, firm, or concise as needed. Focus on clarity and professional impact.",
        model: ToolModel::Flash,
        input: InputKind::Textarea,
        category: Category::Writing,
    },
    ToolSpec {
        id: "meeting-recap",
        name: "Meeting Insights",
        description: "Extract key decisions, action items, owners, and deadlines from meeting notes.",
        icon: "📝",
        placeholder: "Paste your meeting notes or transcript...",
        system_instruction: "Extract structured insights from these meeting notes. Focus on Key Decisions, Action Items with Owners, Deadlines, and Follow-ups.",
        model: ToolModel::Flash,
        input: InputKind::Textarea,
        category: Category::Productivity,
    },
    ToolSpec {
        id: "idea-engine",
        name: "Research Organizer",
        description: "Structure materials, identify themes, and generate outlines from raw research data.",
        icon: "🔍",
        placeholder: "Enter your research notes or materials...",
        system_instruction: "Organize this research material. Identify major themes, key insights, and provide a structured outline and summary.",
        model: ToolModel::Flash,
        input: InputKind::Textarea,
        category: Category::Productivity,
    },
    ToolSpec {
        id: "workflow-generator",
        name: "Workflow Generator",
        description: "Generate automation scripts for Zapier, Python, or shell workflows.",
        icon: "⚙️",
        placeholder: "Describe the workflow you want to automate...",
        system_instruction: "Generate a step-by-step automation workflow. Provide Zapier steps, a Python script, or a shell script as appropriate.",
        model: ToolModel::Pro,
        input: InputKind::Textarea,
        category: Category::Coding,
    },
    ToolSpec {
        id: "pdf-summarizer",
        name: "PDF Summarizer",
        description: "Extract executive summaries, key points, and critical insights from document text.",
        icon: "📄",
        placeholder: "Paste the text extracted from your PDF...",
        system_instruction: "Provide an executive summary, a list of key points, action items, and critical insights from the document text provided.",
        model: ToolModel::Flash,
        input: InputKind::Textarea,
        category: Category::Productivity,
    },
    ToolSpec {
        id: "image-alt-text",
        name: "Image Alt Text",
        description: "Generate SEO-friendly short, medium, and detailed image descriptions.",
        icon: "🖼️",
        placeholder: "Describe the image content for alt text generation...",
        system_instruction: "Generate SEO-friendly image descriptions. Provide a short version, a medium version, and a detailed variation.",
        model: ToolModel::Flash,
        input: InputKind::Textarea,
        category: Category::Writing,
    },
    ToolSpec {
        id: "translator",
        name: "Smart Translator",
        description: "Context-aware translations across 8 languages with tone preservation.",
        icon: "🌐",
        placeholder: "Enter text and target language (Supports 8 languages)...",
        system_instruction: "Provide a context-aware translation. Preserve the tone and nuance. Offer both formal and casual versions.",
        model: ToolModel::Flash,
        input: InputKind::Textarea,
        category: Category::Learning,
    },
    ToolSpec {
        id: "audio-transcriber",
        name: "Audio Transcriber",
        description: "Convert speech notes to clean, formatted text with paragraph breaks.",
        icon: "🎤",
        placeholder: "Paste your raw transcription here...",
        system_instruction: "Clean up this transcription. Add appropriate paragraph breaks, speaker labels (if applicable), and ensure grammatical correctness.",
        model: ToolModel::Flash,
        input: InputKind::Textarea,
        category: Category::Productivity,
    },
    ToolSpec {
        id: "video-summarizer",
        name: "Video Summarizer",
        description: "Extract key moments, timestamps, and actionable takeaways from video scripts.",
        icon: "🎥",
        placeholder: "Paste the video script or transcript...",
        system_instruction: "Analyze the video transcript. Provide a summary, suggested timestamps for key moments, main topics, and actionable takeaways.",
        model: ToolModel::Flash,
        input: InputKind::Textarea,
        category: Category::Writing,
    },
    ToolSpec {
        id: "study-buddy",
        name: "Learning Guide",
        description: "Create personalized learning paths with steps, resources, and practice exercises.",
        icon: "📚",
        placeholder: "What do you want to learn?",
        system_instruction: "Create a learning path. Include prerequisites, a 5-7 step path, resources, and practice exercises. Support levels: Beginner to Expert.",
        model: ToolModel::Pro,
        input: InputKind::Text,
        category: Category::Learning,
    },
    ToolSpec {
        id: "social-media-master",
        name: "Social Media Master",
        description: "Optimize posts for engagement across Twitter, LinkedIn, and Instagram.",
        icon: "📱",
        placeholder: "Enter your post idea...",
        system_instruction: "Optimize this for social media. Provide platform-specific versions (Twitter, LinkedIn, Instagram) with hooks, content, CTAs, and hashtags.",
        model: ToolModel::Flash,
        input: InputKind::Textarea,
        category: Category::Writing,
    },
    ToolSpec {
        id: "seo-optimizer",
        name: "SEO Optimizer",
        description: "Boost search rankings with meta titles, descriptions, and keyword strategies.",
        icon: "🎯",
        placeholder: "Paste your article or draft here...",
        system_instruction: "Provide SEO optimization. Suggest meta titles (max 60 chars), meta descriptions (max 155 chars), H1 suggestions, and a keyword strategy.",
        model: ToolModel::Flash,
        input: InputKind::Textarea,
        category: Category::Writing,
    },
    ToolSpec {
        id: "read-aloud",
        name: "Read Aloud",
        description: "Turn written text into natural spoken audio you can play back or save.",
        icon: "🔊",
        placeholder: "Paste the text you want spoken...",
        system_instruction: "Read the provided text aloud in a clear, natural voice. Do not add commentary or change the wording.",
        model: ToolModel::FlashTts,
        input: InputKind::Textarea,
        category: Category::Productivity,
    },
];
