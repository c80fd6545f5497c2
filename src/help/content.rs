use super::{HelpBook, HelpFlag, HelpTopic, Section};

pub(crate) fn book() -> HelpBook<'static> {
    HelpBook {
        title: "Minimal Notes",
        usage: "mn <command> [options]",
        topics: ALL_TOPICS,
        footer: &[
            "Use `mn help <topic>` for focused docs, e.g. `mn help update` or `mn help session`.",
        ],
    }
}

const YES_FLAG: HelpFlag<'static> = HelpFlag {
    name: "-y, --yes",
    desc: "Skip the confirmation prompt.",
};

const ALL_TOPICS: &[HelpTopic<'static>] = &[
    HelpTopic {
        name: "add",
        summary: "Save a new note.",
        usage: "mn add <title> [text...]",
        details: &[
            "Title and text are trimmed. A blank title is stored as \"Untitled\".",
            "The id is the creation time in epoch milliseconds.",
        ],
        flags: &[],
        aliases: &[],
        section: Section::Command,
        examples: &["mn add \"Groceries\" eggs milk bread"],
    },
    HelpTopic {
        name: "update",
        summary: "Overwrite the title (and optionally text) of a saved note.",
        usage: "mn update <id> <title> [text...]",
        details: &[
            "Keeps the id and creation time and refreshes the modified time.",
            "When no text is given the existing text is kept. An empty title stays empty.",
        ],
        flags: &[],
        aliases: &["edit"],
        section: Section::Command,
        examples: &["mn update 1700000000000 \"Groceries (done)\""],
    },
    HelpTopic {
        name: "list",
        summary: "Show saved notes, newest first, with the first 200 characters of each.",
        usage: "mn list [--relative] [--plain]",
        details: &[],
        flags: &[
            HelpFlag {
                name: "--relative, -r",
                desc: "Show age instead of absolute timestamps.",
            },
            HelpFlag { name: "--plain", desc: "Disable color." },
        ],
        aliases: &["ls"],
        section: Section::Command,
        examples: &[],
    },
    HelpTopic {
        name: "view",
        summary: "Print one note in full.",
        usage: "mn view <id> [--plain]",
        details: &[],
        flags: &[HelpFlag { name: "--plain", desc: "Disable color." }],
        aliases: &["show"],
        section: Section::Command,
        examples: &[],
    },
    HelpTopic {
        name: "delete",
        summary: "Delete one saved note after confirmation.",
        usage: "mn delete <id> [--yes]",
        details: &["Unknown ids are reported and leave the list unchanged."],
        flags: &[YES_FLAG],
        aliases: &["rm"],
        section: Section::Command,
        examples: &[],
    },
    HelpTopic {
        name: "delete-all",
        summary: "Delete every saved note after confirmation.",
        usage: "mn delete-all [--yes]",
        details: &["Removes the storage file itself."],
        flags: &[YES_FLAG],
        aliases: &[],
        section: Section::Command,
        examples: &[],
    },
    HelpTopic {
        name: "export",
        summary: "Print the stored JSON array as is.",
        usage: "mn export",
        details: &[],
        flags: &[],
        aliases: &[],
        section: Section::Command,
        examples: &["mn export > backup.json"],
    },
    HelpTopic {
        name: "session",
        summary: "Edit notes interactively.",
        usage: "mn session",
        details: &[
            "Holds one note in an editor. `save` updates the loaded note or creates a new one; `new` starts blank.",
            "Ctrl/Cmd accelerators can be typed as ^S, ctrl+s, cmd+n and so on.",
            "Type `help` inside the session for the command list.",
        ],
        flags: &[],
        aliases: &["repl"],
        section: Section::Session,
        examples: &[],
    },
    HelpTopic {
        name: "path",
        summary: "Show the notes directory.",
        usage: "mn path",
        details: &[],
        flags: &[],
        aliases: &[],
        section: Section::Command,
        examples: &[],
    },
    HelpTopic {
        name: "help",
        summary: "Show this overview or a single topic.",
        usage: "mn help [topic]",
        details: &[],
        flags: &[],
        aliases: &[],
        section: Section::Command,
        examples: &[],
    },
    HelpTopic {
        name: "MINIMAL_NOTES_DIR",
        summary: "Notes directory (default ~/.minimal_notes).",
        usage: "MINIMAL_NOTES_DIR",
        details: &[],
        flags: &[],
        aliases: &[],
        section: Section::Environment,
        examples: &[],
    },
    HelpTopic {
        name: "MINIMAL_NOTES_KEY",
        summary: "Storage key; notes live in <dir>/<key>.json (default minimal-notes).",
        usage: "MINIMAL_NOTES_KEY",
        details: &[],
        flags: &[],
        aliases: &[],
        section: Section::Environment,
        examples: &[],
    },
    HelpTopic {
        name: "MINIMAL_NOTES_STATUS_MS",
        summary: "How long a status message shows before reverting to Idle (default 1000).",
        usage: "MINIMAL_NOTES_STATUS_MS",
        details: &[],
        flags: &[],
        aliases: &[],
        section: Section::Environment,
        examples: &[],
    },
    HelpTopic {
        name: "MINIMAL_NOTES_LOG",
        summary: "Log filter, e.g. minimal_notes=debug (default warn).",
        usage: "MINIMAL_NOTES_LOG",
        details: &[],
        flags: &[],
        aliases: &[],
        section: Section::Environment,
        examples: &[],
    },
    HelpTopic {
        name: "NO_COLOR",
        summary: "Disable color output.",
        usage: "NO_COLOR",
        details: &[],
        flags: &[],
        aliases: &[],
        section: Section::Environment,
        examples: &[],
    },
];
