//! Commits and commit creation

use std::fmt;
use std::marker::PhantomData;
use std::os::raw::c_uint;
use std::ptr;

use gitbind_ffi::raw;
use tracing::debug;

use crate::config::CommitConfig;
use crate::index::Index;
use crate::message::{self, DEFAULT_COMMENT_CHAR};
use crate::oid::Oid;
use crate::repository::Repository;
use crate::signature::Signature;
use crate::tree::Tree;
use crate::util::{from_cstr, to_cstring, Buf};
use crate::{Error, Result};

/// A commit looked up in a repository
pub struct Commit<'repo> {
    raw: *mut raw::git_commit,
    _marker: PhantomData<&'repo Repository>,
}

impl<'repo> Commit<'repo> {
    /// # Safety
    ///
    /// `raw` must be a valid commit that nothing else frees.
    pub(crate) unsafe fn from_raw(raw: *mut raw::git_commit) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    pub(crate) fn raw(&self) -> *const raw::git_commit {
        self.raw
    }

    pub fn id(&self) -> Oid {
        unsafe { Oid::from_raw(raw::git_commit_id(self.raw)) }
    }

    /// Full commit message
    pub fn message(&self) -> String {
        unsafe { from_cstr(raw::git_commit_message(self.raw)) }.unwrap_or_default()
    }

    /// A copy of the author signature
    pub fn author(&self) -> Result<Signature> {
        unsafe { Signature::duplicate_raw(raw::git_commit_author(self.raw)) }
    }

    /// A copy of the committer signature
    pub fn committer(&self) -> Result<Signature> {
        unsafe { Signature::duplicate_raw(raw::git_commit_committer(self.raw)) }
    }

    pub fn tree_id(&self) -> Oid {
        unsafe { Oid::from_raw(raw::git_commit_tree_id(self.raw)) }
    }

    pub fn parent_count(&self) -> usize {
        let res = unsafe { gitbind_ffi::commit_parentcount(self.raw) };
        usize::try_from(res.code()).unwrap_or(0)
    }

    /// The `n`th parent
    pub fn parent(&self, n: usize) -> Result<Commit<'repo>> {
        let n = c_uint::try_from(n).unwrap_or(c_uint::MAX);
        let mut out = ptr::null_mut();
        unsafe { gitbind_ffi::commit_parent(&mut out, self.raw, n) }.into_result()?;
        Ok(unsafe { Commit::from_raw(out) })
    }

    /// All parents, in order
    pub fn parents(&self) -> Result<Vec<Commit<'repo>>> {
        (0..self.parent_count()).map(|n| self.parent(n)).collect()
    }

    /// Shortest unambiguous abbreviation of the id
    pub fn short_id(&self) -> Result<String> {
        let mut buf = Buf::new();
        unsafe { gitbind_ffi::object_short_id(buf.raw(), self.raw as *const raw::git_object) }
            .into_result()?;
        Ok(buf.to_string_lossy())
    }
}

impl fmt::Display for Commit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl fmt::Debug for Commit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Commit").field("id", &self.id()).finish()
    }
}

impl Drop for Commit<'_> {
    fn drop(&mut self) {
        unsafe { raw::git_commit_free(self.raw) }
    }
}

/// How to clean up a message before committing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageCleanup {
    /// Drop lines starting with `comment_char`
    pub strip_comments: bool,
    pub comment_char: char,
}

impl Default for MessageCleanup {
    fn default() -> Self {
        Self {
            strip_comments: true,
            comment_char: DEFAULT_COMMENT_CHAR,
        }
    }
}

/// Options for [`Repository::commit`]
///
/// Unset fields fall back to the repository: the default signature, the
/// tree of the repository index, and the commit HEAD points at.
#[derive(Debug)]
pub struct CommitOptions<'a> {
    /// Author; defaults to the repository's default signature
    pub author: Option<&'a Signature>,
    /// Committer; defaults to the author
    pub committer: Option<&'a Signature>,
    /// Index to write the tree from; defaults to the repository index
    pub index: Option<&'a mut Index>,
    /// Tree to commit; takes precedence over `index`
    pub tree: Option<&'a Tree<'a>>,
    /// Parents; defaults to HEAD's commit, or none on an unborn branch
    pub parents: Option<Vec<&'a Commit<'a>>>,
    /// Message encoding; `None` means UTF-8
    pub encoding: Option<String>,
    pub message: String,
    /// Reference to move to the new commit; `None` leaves references alone
    pub update_ref: Option<String>,
    /// Allow a commit from an empty index or one whose tree matches its sole parent
    pub allow_empty: bool,
    pub allow_empty_message: bool,
    /// Clean up the message first; `None` commits it untouched
    pub cleanup: Option<MessageCleanup>,
}

impl Default for CommitOptions<'_> {
    fn default() -> Self {
        Self {
            author: None,
            committer: None,
            index: None,
            tree: None,
            parents: None,
            encoding: None,
            message: String::new(),
            update_ref: Some("HEAD".to_string()),
            allow_empty: false,
            allow_empty_message: false,
            cleanup: None,
        }
    }
}

impl CommitOptions<'_> {
    /// Options seeded from the `[commit]` configuration section
    pub fn from_config(config: &CommitConfig) -> Self {
        let cleanup = config.cleanup.then_some(MessageCleanup {
            strip_comments: config.strip_comments,
            comment_char: config.comment_char,
        });
        Self {
            cleanup,
            ..Self::default()
        }
    }

    /// Set the message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Repository {
    /// Create a commit
    ///
    /// Fails with [`Error::NothingToCommit`] when the tree comes from an empty
    /// index, or matches the sole parent's tree, unless `allow_empty` is set;
    /// and with [`Error::EmptyMessage`] when the (cleaned up) message is empty,
    /// unless `allow_empty_message` is set.
    pub fn commit(&self, options: CommitOptions<'_>) -> Result<Commit<'_>> {
        let CommitOptions {
            author,
            committer,
            index,
            tree,
            parents,
            encoding,
            message,
            update_ref,
            allow_empty,
            allow_empty_message,
            cleanup,
        } = options;

        let mut repo_index;
        let written_tree;
        let tree: &Tree<'_> = match tree {
            Some(tree) => tree,
            None => {
                let index = match index {
                    Some(index) => index,
                    None => {
                        repo_index = self.index()?;
                        &mut repo_index
                    }
                };
                if index.entry_count() == 0 && !allow_empty {
                    return Err(Error::NothingToCommit);
                }
                written_tree = index.write_tree(self)?;
                &written_tree
            }
        };

        let tip;
        let parents: Vec<&Commit<'_>> = match parents {
            Some(parents) => parents,
            None => {
                if self.is_head_unborn()? {
                    Vec::new()
                } else {
                    tip = self.tip()?;
                    vec![&tip]
                }
            }
        };

        if !allow_empty {
            if let [parent] = parents.as_slice() {
                if parent.tree_id() == tree.id() {
                    return Err(Error::NothingToCommit);
                }
            }
        }

        let message = match cleanup {
            Some(c) => message::prettify(&message, c.strip_comments, c.comment_char)?,
            None => message,
        };
        if message.is_empty() && !allow_empty_message {
            return Err(Error::EmptyMessage);
        }

        let default_author;
        let author = match author {
            Some(author) => author,
            None => {
                default_author = self.default_signature()?;
                &default_author
            }
        };
        let committer = committer.unwrap_or(author);

        let update_ref = update_ref.as_deref().map(to_cstring).transpose()?;
        let encoding = encoding.as_deref().map(to_cstring).transpose()?;
        let cmessage = to_cstring(&message)?;
        let parent_ptrs: Vec<*mut raw::git_commit> =
            parents.iter().map(|c| c.raw() as *mut _).collect();

        let mut oid = Oid::ZERO.to_raw();
        unsafe {
            gitbind_ffi::commit_create(
                &mut oid,
                self.raw(),
                update_ref.as_ref().map_or(ptr::null(), |s| s.as_ptr()),
                author.raw(),
                committer.raw(),
                encoding.as_ref().map_or(ptr::null(), |s| s.as_ptr()),
                cmessage.as_ptr(),
                tree.raw(),
                parent_ptrs.len(),
                parent_ptrs.as_ptr(),
            )
        }
        .into_result()?;

        let id = unsafe { Oid::from_raw(&oid) };
        debug!(oid = %id, parents = parent_ptrs.len(), "created commit");
        self.find_commit(id)
    }
}
