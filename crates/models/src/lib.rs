// models crate

use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// A class room shared by every exam that references it. Built once,
/// never mutated afterwards; callers hand it around as `Arc<ClassRoom>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassRoom {
    id: String,
    name: String,
    students: Vec<u32>,
}

impl ClassRoom {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        ClassRoom {
            id: id.into(),
            name: name.into(),
            students: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids of the enrolled students, in enrollment order.
    pub fn students(&self) -> &[u32] {
        &self.students
    }
}

/// A student record. The id and class room are fixed at construction;
/// everything else is set through the builder before `build` seals the
/// value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    id: u32,
    first_name: String,
    last_name: String,
    username: Option<String>,
    email: Option<String>,
    class_room: Arc<ClassRoom>,
}

impl Student {
    /// Starts a builder for a student with the given id and class room.
    pub fn with_id(id: u32, class_room: Arc<ClassRoom>) -> StudentBuilder {
        StudentBuilder {
            id,
            class_room,
            first_name: String::new(),
            last_name: String::new(),
            username: None,
            email: None,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn class_room(&self) -> &Arc<ClassRoom> {
        &self.class_room
    }
}

/// Consuming builder for [`Student`]. No partially built student ever
/// reaches the validator.
#[derive(Debug)]
pub struct StudentBuilder {
    id: u32,
    class_room: Arc<ClassRoom>,
    first_name: String,
    last_name: String,
    username: Option<String>,
    email: Option<String>,
}

impl StudentBuilder {
    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = value.into();
        self
    }

    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = value.into();
        self
    }

    pub fn username(mut self, value: impl Into<String>) -> Self {
        self.username = Some(value.into());
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn build(self) -> Student {
        Student {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            username: self.username,
            email: self.email,
            class_room: self.class_room,
        }
    }
}

/// One student sitting one subject. Immutable once built; consumed
/// exactly once by the validator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Exam {
    student: Arc<Student>,
    class_room: Option<Arc<ClassRoom>>,
    subject: Option<String>,
    mark: i32,
}

impl Exam {
    /// Starts a builder for an exam sat by the given student.
    pub fn of(student: Arc<Student>) -> ExamBuilder {
        ExamBuilder {
            student,
            class_room: None,
            subject: None,
            mark: 0,
        }
    }

    pub fn student(&self) -> &Student {
        &self.student
    }

    pub fn class_room(&self) -> Option<&Arc<ClassRoom>> {
        self.class_room.as_ref()
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn mark(&self) -> i32 {
        self.mark
    }
}

/// Consuming builder for [`Exam`]. Subject and class room stay unset
/// unless provided, which is how missing data enters the pipeline.
#[derive(Debug)]
pub struct ExamBuilder {
    student: Arc<Student>,
    class_room: Option<Arc<ClassRoom>>,
    subject: Option<String>,
    mark: i32,
}

impl ExamBuilder {
    pub fn class_room(mut self, value: Arc<ClassRoom>) -> Self {
        self.class_room = Some(value);
        self
    }

    pub fn subject(mut self, value: impl Into<String>) -> Self {
        self.subject = Some(value.into());
        self
    }

    pub fn mark(mut self, value: i32) -> Self {
        self.mark = value;
        self
    }

    pub fn build(self) -> Exam {
        Exam {
            student: self.student,
            class_room: self.class_room,
            subject: self.subject,
            mark: self.mark,
        }
    }
}

/// Failure payload of the pipeline: the violated rule's reason together
/// with the offending exam.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{reason}")]
pub struct ValidationError {
    pub reason: String,
    pub exam: Exam,
}

/// The two-variant sum type threaded through the whole pipeline.
pub type ExamResult = Result<Exam, ValidationError>;
