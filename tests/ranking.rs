use tf_idf_ranker::{
    cosine_similarity, inverse_document_frequency, load_corpus, match_query, term_frequency, token_views, tokenize,
    weight_terms, RankingConfig, TFIDFVectorizer, TermWeights, DEFAULT_EPSILON,
};

const FRUIT: [&str; 2] = ["apple banana apple orange", "banana fruit apple banana"];

const DOCUMENTS: [&str; 38] = [
    "apple banana apple orange",
    "banana fruit apple banana",
    "celular motorola con camara triple",
    "iphone con chip bionic y buena camara",
    "smartphone barato con android",
    "celular con buena bateria y pantalla grande",
    "The dog (Canis familiaris or Canis lupus familiaris) is a domesticated descendant of the gray wolf.",
    "This radio frequency link connects to the switching systems of a mobile phone operator, providing access to the public switched telephone network (PSTN).",
    "The dog was the first species to be domesticated by humans, over 14,000 years ago and before the development of agriculture.",
    "These include text messaging, multimedia messaging, email, and internet access (via LTE, 5G NR or Wi-Fi), as well as short-range wireless technologies like Bluetooth, infrared, and ultra-wideband (UWB).",
    "Dogs have been bred for desired behaviors, sensory capabilities, and physical attributes. Dog breeds vary widely in shape, size, and color.",
    "In addition, they enable multimedia playback and streaming, including video content, as well as radio and television streaming.",
    "They have the same number of bones (with the exception of the tail), powerful jaws that house around 42 teeth, and well-developed senses of smell, hearing, and sight.",
    "Mobile phones also support a variety of multimedia capabilities, such as digital photography, video recording, and gaming.",
    "Compared to humans, dogs possess a superior sense of smell and hearing, but inferior visual acuity.",
    "Beyond traditional voice communication, digital mobile phones have evolved to support a wide range of additional services.",
    "Communication in dogs includes eye gaze, facial expression, vocalization, body posture (including movements of bodies and limbs), and gustatory communication (scents, pheromones, and taste).",
    "In 2024, the top smartphone manufacturers worldwide were Samsung, Apple and Xiaomi; smartphone sales represented about 50 percent of total mobile phone sales.[6][7]",
    "Dogs perform many roles for humans, such as hunting, herding, pulling loads, protection, companionship, therapy, aiding disabled people, and assisting police and the military.",
    "In 1983, the DynaTAC 8000x was the first commercially available handheld mobile phone.",
    "They mark their territories by urinating on them, which is more likely when entering a new environment.",
    "In 1979, Nippon Telegraph and Telephone (NTT) launched the world's first cellular network in Japan.[3]",
    "Over the millennia, dogs have uniquely adapted to human behavior; this adaptation includes being able to understand and communicate with humans.",
    "The first handheld mobile phone was demonstrated by Martin Cooper of Motorola in New York City on 3 April 1973, using a handset weighing c. 2 kilograms (4.4 lbs).[2]",
    "As such, the human-canine bond has been a topic of frequent study, and dogs' influence on human society has given them the sobriquet of c\"man's best friend\".",
    "Today, mobile phones are globally ubiquitous,[11] and in almost half the world's countries, over 90%% of the population owns at least one.[12]",
    "The dog is the most popular pet in the United States, present in 34-40%% of households. ",
    "A mobile phone or cell phone is a portable telephone that allows users to make and receive calls over a radio frequency link while moving within a designated telephone service area, unlike fixed-location phones (landline phones).",
    "Also called the domestic dog, it was selectively bred from a population of wolves during the Late Pleistocene by hunter-gatherers.",
    "Modern mobile telephony relies on a cellular network architecture, which is why mobile phones are often referred to as 'cell phones' in North America.",
    "Due to their long association with humans, dogs have gained the ability to thrive on a starch-rich diet that would be inadequate for other canids.",
    "Furthermore, mobile phones offer satellite-based services, such as navigation and messaging, as well as business applications and payment solutions (via scanning QR codes or near-field communication (NFC)).",
    "Mobile phones offering only basic features are often referred to as feature phones (slang: dumbphones), while those with advanced computing power are known as smartphones.[1]",
    "The global dog population is estimated at 700 million to 1 billion, distributed around the world.",
    "From 1993 to 2024, worldwide mobile phone subscriptions grew to over 9.1 billion; enough to provide one for every person on Earth.[4][5]",
    "For feature phones as of 2016, the top-selling brands were Samsung, Nokia and Alcatel.[8]",
    "Developed countries make up approximately 20%% of the global dog population, while around 75%% of dogs are estimated to be from developing countries, mainly in the form of feral and community dogs.",
    "Mobile phones are considered an important human invention as they have been one of the most widely used and sold pieces of consumer technology.[9] The growth in popularity has been rapid in some places; for example, in the UK, the total number of mobile phones overtook the number of houses in 1999.[10]",
];

fn bits(map: &TermWeights<'_>) -> Vec<(String, u64)> {
    map.iter().map(|(term, weight)| (term.to_string(), weight.to_bits())).collect()
}

#[test]
fn tokenize_then_count() {
    let text = FRUIT[0];
    let tokenized = tokenize(text, "").unwrap();
    assert_eq!(token_views(text, &tokenized.spans).unwrap(), vec!["apple", "banana", "apple", "orange"]);

    let tf = term_frequency(text, &tokenized.spans).unwrap();
    assert_eq!(tf.weight("apple"), 0.5);
    assert_eq!(tf.weight("banana"), 0.25);
    assert_eq!(tf.weight("orange"), 0.25);
    assert_eq!(tf.limits().max.term, "apple");
    assert_eq!(tf.limits().max.weight, 0.5);
    assert!(["banana", "orange"].contains(&tf.limits().min.term));
    assert_eq!(tf.limits().min.weight, 0.25);
}

#[test]
fn frequencies_sum_to_one_for_every_document() {
    for text in DOCUMENTS {
        let spans = tokenize(text, "").unwrap().spans;
        let tf = term_frequency(text, &spans).unwrap();
        let sum: f64 = tf.weights().values().sum();
        assert!((sum - 1.0).abs() < 1e-9, "{}: {}", text, sum);
    }
}

#[test]
fn idf_of_two_documents() {
    let views: Vec<Vec<&str>> = FRUIT
        .iter()
        .map(|&text| token_views(text, &tokenize(text, "").unwrap().spans).unwrap())
        .collect();
    let (idf, occurrences) = inverse_document_frequency(&views);
    assert_eq!(occurrences["banana"], 2);
    assert_eq!(idf["banana"], (2.0f64 / 3.0).ln());
    assert_eq!(idf["orange"], 0.0);
    assert_eq!(idf["fruit"], 0.0);
    assert_eq!(idf.len(), 4);
}

#[test]
fn weighting_drops_unknown_terms() {
    let tf: TermWeights = [("a", 0.5), ("b", 0.5)].into_iter().collect();
    let idf: TermWeights = [("a", 1.0)].into_iter().collect();
    let expected: TermWeights = [("a", 0.5)].into_iter().collect();
    assert_eq!(weight_terms(&tf, &idf), expected);
}

#[test]
fn cosine_edge_cases() {
    let v: TermWeights = [("x", 0.4), ("y", -0.1)].into_iter().collect();
    assert!((cosine_similarity(&v, &v, 0.0) - 1.0).abs() < 1e-12);
    assert_eq!(cosine_similarity(&TermWeights::new(), &TermWeights::new(), DEFAULT_EPSILON), 0.0);
}

#[test]
fn fruit_query_matches_the_first_document() {
    // both documents score exactly the same, the strict comparison keeps index 0
    let config = RankingConfig::default();
    let (idf, weighted) = load_corpus(&FRUIT, &config).unwrap();
    assert_eq!(match_query(&idf, &weighted, "apple banana", &config).unwrap(), Some(0));

    let vectorizer: TFIDFVectorizer = TFIDFVectorizer::load(&FRUIT, config).unwrap();
    let hits = vectorizer.rank_query("apple banana").unwrap();
    assert_eq!(hits.list[0].score, hits.list[1].score);
    assert!((hits.list[0].score - 0.948_668_7).abs() < 1e-6);
}

#[test]
fn loading_twice_is_bit_identical() {
    let config = RankingConfig::default();
    let (idf_a, weighted_a) = load_corpus(&DOCUMENTS, &config).unwrap();
    let (idf_b, weighted_b) = load_corpus(&DOCUMENTS, &config).unwrap();
    assert_eq!(bits(&idf_a), bits(&idf_b));
    assert_eq!(weighted_a.len(), DOCUMENTS.len());
    for (a, b) in weighted_a.iter().zip(&weighted_b) {
        assert_eq!(bits(a), bits(b));
    }
}

#[test]
fn queries_find_their_topic() {
    let vectorizer: TFIDFVectorizer = TFIDFVectorizer::load(&DOCUMENTS, RankingConfig::default()).unwrap();
    let cases = [
        ("Often in colloquial terms it is referred to as simply phone, mobile or cell.", 29),
        ("These breeds possess distinct traits related to morphology, which include body size, skull shape, tail phenotype, fur type, and colour.", 10),
        ("As such, humans have long used dogs for their desirable traits to complete or fulfill a certain work or role.", 30),
        ("Their behavioural traits include guarding, herding, hunting, retrieving, and scent detection.", 18),
    ];
    for (query, expected) in cases {
        assert_eq!(vectorizer.match_query(query).unwrap(), Some(expected), "{}", query);
    }
}

#[test]
fn digits_only_query_has_no_match() {
    let vectorizer: TFIDFVectorizer = TFIDFVectorizer::load(&DOCUMENTS, RankingConfig::default()).unwrap();
    assert_eq!(vectorizer.match_query("1973 2024, 90%").unwrap(), None);
    // brackets sit between 'Z' and 'a' and are tokens of their own
    assert_eq!(vectorizer.match_query("[12]").unwrap(), Some(25));
}

#[test]
fn pairwise_listing_covers_the_collection() {
    let vectorizer: TFIDFVectorizer = TFIDFVectorizer::load(&DOCUMENTS, RankingConfig::default()).unwrap();
    let pairs = vectorizer.pairwise_similarity();
    assert_eq!(pairs.len(), DOCUMENTS.len() * (DOCUMENTS.len() - 1) / 2);
    assert!(pairs.iter().all(|(_, _, score)| score.is_finite()));
}
