//! # Package Descriptions
//!
//! Static `name -> description` side table shown in the right pane. The table
//! is built once at startup and passed into the parser explicitly; user
//! overrides from the config file are layered on top with
//! [`Descriptions::with_overrides`].

use std::collections::HashMap;

/// Built-in descriptions for the packages in the bundled Brewfile. Formulae
/// and casks share one namespace.
const BUILTIN: &[(&str, &str)] = &[
    ("bash", "Modern shell (Bash 5.x) with improved features"),
    ("bash-completion@2", "Programmable tab completion for Bash 4.1+"),
    ("bat", "cat clone with syntax highlighting and Git integration"),
    ("coreutils", "GNU core utilities — enhanced versions of standard Unix tools"),
    ("fastfetch", "Fast, customizable system information display"),
    ("gh", "GitHub CLI — official command-line tool for GitHub"),
    ("git", "Distributed version control system"),
    ("gnupg", "GNU Privacy Guard — encryption and signing tool"),
    ("htop", "Interactive process viewer and system monitor"),
    ("lsd", "Modern ls replacement with colors and icons"),
    ("mac-cleanup-py", "Clean macOS caches, logs, downloads, and trash"),
    ("mkdocs", "Static site generator for project documentation"),
    ("moreutils", "Useful Unix utilities: sponge, vidir, ts, and more"),
    ("nano", "Simple terminal text editor"),
    ("nanorc", "Syntax highlighting configurations for nano"),
    ("ncdu", "Disk usage analyzer with ncurses interface"),
    ("nethogs", "Monitor network bandwidth usage per process"),
    ("nmap", "Network exploration and security auditing tool"),
    ("openssh", "OpenSSH client and server for secure remote access"),
    ("pandoc", "Universal document converter"),
    ("paperkey", "Extract GnuPG secret keys for offline paper backup"),
    ("pinentry-mac", "PIN/passphrase entry dialog for GnuPG on macOS"),
    ("pwgen", "Secure, memorable password generator"),
    ("qemu", "Generic machine emulator and virtualizer"),
    ("qrencode", "Generate QR codes from text strings"),
    ("rclone", "Cloud storage sync tool (S3, Dropbox, GDrive, and more)"),
    ("deno", "Secure JavaScript/TypeScript runtime by the Deno team"),
    ("go", "Go programming language compiler and tools"),
    ("gum", "Charm TUI toolkit — used as fallback package picker"),
    ("ripgrep", "Extremely fast regex search tool (rg)"),
    ("shellcheck", "Static analysis and linting tool for shell scripts"),
    ("shfmt", "Shell script formatter"),
    ("tealdeer", "Fast tldr client — simplified, practical man pages"),
    ("topgrade", "Update everything at once across all package managers"),
    ("trash", "Move files to macOS Trash instead of permanently deleting"),
    ("tree", "Display directory contents as a visual tree"),
    ("watch", "Repeatedly run a command and display its output"),
    ("wget", "Internet file retriever"),
    ("zsh", "Z shell — advanced interactive shell with many features"),
    ("nvm", "Node Version Manager — install and manage Node.js versions"),
    ("python@3.12", "Python 3.12 programming language interpreter"),
    ("pipx", "Install and run Python apps in isolated environments"),
    ("pyenv", "Python version manager"),
    ("openjdk", "OpenJDK — open-source Java Development Kit"),
    ("ffmpeg", "Complete solution for audio/video recording and conversion"),
    ("chromaprint", "Audio fingerprinting library (AcoustID core component)"),
    ("whisper-cpp", "Speech-to-text engine (optimized C++ port of Whisper)"),
    ("yt-dlp", "Download video and audio from YouTube and 1000+ sites"),
    ("1password", "Password manager and secure digital wallet"),
    ("1password-cli", "1Password command-line tool (op)"),
    ("4k-video-downloader+", "Download videos from YouTube and other platforms"),
    ("a-better-finder-rename", "Powerful batch file renaming for Finder"),
    ("adapter", "Convert audio, video, and image files"),
    ("aldente", "Battery charge limiter to extend MacBook battery life"),
    ("appcleaner", "Completely uninstall apps and all their leftover files"),
    ("arctic", "Git client for GitHub, GitLab, and Bitbucket"),
    ("audio-hijack", "Record and process audio from any application"),
    ("auto-claude", "Automated Claude AI workflows"),
    ("balenaetcher", "Flash OS images to SD cards and USB drives"),
    ("bitwarden", "Open-source password manager"),
    ("brave-browser", "Privacy-focused browser based on Chromium"),
    ("calibre", "E-book manager, reader, and format converter"),
    ("chatgpt", "OpenAI ChatGPT desktop application"),
    ("claude", "Anthropic Claude desktop application"),
    ("claude-code", "Claude Code CLI tool"),
    ("cryptomator", "Client-side encryption for files stored in the cloud"),
    ("descript", "AI-powered audio and video editor"),
    ("discord", "Voice, video, and text chat for communities"),
    ("disk-drill", "Data recovery software and disk health monitoring"),
    ("dropbox", "Cloud storage and file synchronization service"),
    ("etrecheckpro", "macOS system maintenance and diagnostics tool"),
    ("farrago", "Robust, rapid-fire soundboard for Mac"),
    ("firefox", "Free and open-source web browser by Mozilla"),
    ("fission", "Fast, lossless audio editor for Mac"),
    ("folx", "Download manager with integrated torrent support"),
    ("github", "GitHub Desktop — visual Git client"),
    ("google-chrome", "Google Chrome web browser"),
    ("google-chrome@canary", "Chrome Canary — bleeding-edge preview builds"),
    ("google-drive", "Google Drive desktop cloud storage client"),
    ("gpg-suite-no-mail", "GPG tools for macOS (without the Mail plugin)"),
    ("handbrake-app", "Open-source video transcoder"),
    ("helium-browser", "Floating browser window that sits above other apps"),
    ("hot", "macOS menu bar CPU temperature and frequency monitor"),
    ("ilok-license-manager", "iLok USB hardware license manager"),
    ("iterm2", "Feature-rich terminal emulator for macOS"),
    ("izotope-product-portal", "iZotope audio plugin installer and manager"),
    ("jordanbaird-ice", "Menu bar item hider and manager"),
    ("keka", "File archiver and extractor for macOS"),
    ("keybase", "Secure key directory, file sharing, and messaging"),
    ("keyboardcleantool", "Temporarily disable keyboard and trackpad for cleaning"),
    ("kid3", "Cross-platform audio tag editor"),
    ("kobo", "Kobo e-reader desktop application"),
    ("loopback", "Cable-free audio routing between apps on Mac"),
    ("losslesscut", "Lossless video and audio trimmer and cutter"),
    ("macfuse", "FUSE file system extensions for macOS"),
    ("macwhisper", "macOS app for Whisper-powered audio transcription"),
    ("mdrp", "Mastodon and decentralized social media client"),
    ("mediainfo", "Display technical information about media files"),
    ("minecraft", "Minecraft game launcher"),
    ("musicbrainz-picard", "Music tagger using the MusicBrainz database"),
    ("nordvpn", "NordVPN client for macOS"),
    ("omnidisksweeper", "Disk usage analyzer for macOS"),
    ("onyx", "System maintenance, tweaking, and cleaning for macOS"),
    ("openaudible", "Audible audiobook manager and converter"),
    ("openmtp", "Android file transfer client (MTP)"),
    ("piezo", "Effortless audio recording from any application"),
    ("pulsar", "Community-driven Atom editor fork"),
    ("raspberry-pi-imager", "Official Raspberry Pi OS imaging tool"),
    ("raycast", "Extensible macOS launcher and productivity platform"),
    ("samsung-magician", "Samsung SSD firmware and management utility"),
    ("screenflow", "Screen recording and video editing for Mac"),
    ("shutter-encoder", "Video, audio, and image converter and encoder"),
    ("signal", "Private, end-to-end encrypted messaging"),
    ("slack", "Team messaging and collaboration platform"),
    ("soundsource", "System-wide per-application audio control for Mac"),
    ("stats", "macOS system statistics in the menu bar"),
    ("steam", "Steam PC gaming platform and library"),
    ("subler", "MP4 file muxer, subtitle editor, and tag editor"),
    ("swift-publisher", "Desktop publishing and brochure design for Mac"),
    ("the-unarchiver", "Archive extractor supporting many formats"),
    ("timemachineeditor", "Schedule and control Time Machine backup frequency"),
    ("typora", "Minimal Markdown editor with live preview"),
    ("utm", "Virtual machine host using QEMU for macOS and iOS"),
    ("veracrypt", "Open-source disk encryption software"),
    ("vlc", "Free, open-source media player for any format"),
    ("waves-central", "Waves audio plugin installer and license manager"),
    ("whatsapp", "WhatsApp desktop messaging client"),
    ("zoom", "Video conferencing and online meetings"),
];

/// Immutable lookup of package descriptions.
#[derive(Debug, Clone, Default)]
pub struct Descriptions {
    entries: HashMap<String, String>,
}

impl Descriptions {
    /// The built-in table.
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN.iter().copied())
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(name, desc)| (name.to_string(), desc.to_string()))
                .collect(),
        }
    }

    /// Layer user-supplied descriptions over this table. Overrides win.
    pub fn with_overrides(mut self, overrides: &HashMap<String, String>) -> Self {
        self.entries.extend(
            overrides
                .iter()
                .map(|(name, desc)| (name.clone(), desc.clone())),
        );
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_formulae_and_casks() {
        let descriptions = Descriptions::builtin();
        assert_eq!(descriptions.get("ripgrep"), Some("Extremely fast regex search tool (rg)"));
        assert_eq!(descriptions.get("iterm2"), Some("Feature-rich terminal emulator for macOS"));
        assert_eq!(descriptions.len(), BUILTIN.len());
    }

    #[test]
    fn test_unknown_name_has_no_description() {
        assert_eq!(Descriptions::builtin().get("definitely-not-a-package"), None);
    }

    #[test]
    fn test_overrides_replace_and_extend() {
        let mut overrides = HashMap::new();
        overrides.insert("git".to_string(), "Version control".to_string());
        overrides.insert("my-tool".to_string(), "In-house helper".to_string());

        let descriptions = Descriptions::builtin().with_overrides(&overrides);
        assert_eq!(descriptions.get("git"), Some("Version control"));
        assert_eq!(descriptions.get("my-tool"), Some("In-house helper"));
        assert_eq!(descriptions.get("wget"), Some("Internet file retriever"));
    }

    #[test]
    fn test_default_is_empty() {
        let descriptions = Descriptions::default();
        assert!(descriptions.is_empty());
        assert_eq!(descriptions.get("git"), None);
    }
}
