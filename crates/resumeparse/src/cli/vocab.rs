use resumeparse_core::ResumePipeline;

use super::VocabKind;

pub fn run(pipeline: &ResumePipeline, kind: VocabKind) {
    let lexicon = pipeline.lexicon();
    let vocabulary = match kind {
        VocabKind::Skills => &lexicon.skills,
        VocabKind::Education => &lexicon.education,
        VocabKind::Titles => &lexicon.titles,
    };

    for term in vocabulary.iter() {
        println!("{term}");
    }
}
