/// A short guide exercising every block kind.
pub const SAMPLE_GUIDE: &str = "# Git 연결 가이드

이 문서는 **원격 저장소** 연결 방법을 설명합니다.

## 1. 저장소 만들기

**준비물**

Run the commands below, then check with **git remote -v**.

```
git init
git remote add origin https://example.com/repo.git

git push -u origin main
```

## 2. 확인

끝.
";

pub const UNTERMINATED_FENCE: &str = "## Setup\n```\ncargo build\n";

/// `count` paragraphs of filler text, enough to span several pages.
pub fn long_document(count: usize) -> String {
    let mut doc = String::from("# Long document\n\n");
    for i in 0..count {
        doc.push_str(&format!(
            "Paragraph {i} has **some bold words** and enough ordinary text to wrap over a couple of lines on an A4 page.\n\n"
        ));
    }
    doc
}
