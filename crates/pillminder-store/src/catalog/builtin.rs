//! Built-in medicine descriptions served by the lookup endpoints.
//!
//! Names are lowercase. The listing this table came from repeated several
//! names; those were flattened keeping the last description given.

pub(super) const BUILTIN_MEDICINES: &[(&str, &str)] = &[
    ("lisinopril", "ACE inhibitor used for hypertension and heart failure."),
    ("levothyroxine", "Thyroid hormone replacement for hypothyroidism."),
    ("atorvastatin", "Statin used to lower cholesterol."),
    ("metformin", "Oral medicine for type 2 diabetes."),
    ("amlodipine", "Calcium channel blocker for hypertension."),
    ("metoprolol", "Beta-blocker used for hypertension and angina."),
    ("omeprazole", "PPI for GERD and ulcers."),
    ("simvastatin", "Statin used to lower cholesterol."),
    ("losartan", "ARB used for hypertension."),
    ("albuterol", "Inhaler for asthma and COPD."),
    ("gabapentin", "Used for nerve pain and seizures."),
    ("hydrochlorothiazide", "Diuretic used for hypertension and edema."),
    ("sertraline", "SSRI antidepressant."),
    ("montelukast", "Leukotriene receptor antagonist for asthma."),
    ("escitalopram", "SSRI antidepressant."),
    ("fluticasone", "Corticosteroid for allergies and asthma."),
    ("amoxicillin", "Antibiotic for bacterial infections."),
    ("furosemide", "Loop diuretic used for hypertension and edema."),
    ("pantoprazole", "PPI for GERD and ulcers."),
    ("trazodone", "Antidepressant, often used for insomnia."),
    ("pravastatin", "Statin used to lower cholesterol."),
    ("rosuvastatin", "Statin used to lower cholesterol."),
    ("tramadol", "Opioid-like pain reliever."),
    ("warfarin", "Anticoagulant for preventing blood clots."),
    ("clopidogrel", "Antiplatelet drug to prevent heart attacks and strokes."),
    ("meloxicam", "NSAID for arthritis pain."),
    ("prednisone", "Corticosteroid for inflammation."),
    ("duloxetine", "SNRI antidepressant, also for nerve pain."),
    ("citalopram", "SSRI antidepressant."),
    ("alprazolam", "Benzodiazepine for anxiety."),
    ("fluoxetine", "SSRI antidepressant."),
    ("insulin glargine", "Long-acting insulin for diabetes."),
    ("venlafaxine", "SNRI antidepressant."),
    ("allopurinol", "Used to prevent gout attacks."),
    ("bupropion", "Antidepressant and smoking cessation aid."),
    ("oxycodone", "Opioid for moderate to severe pain."),
    ("acetaminophen", "Pain reliever, fever reducer."),
    ("hydrocodone", "Opioid combination for pain."),
    ("ethinyl estradiol", "Oral contraceptive pill."),
    ("norgestimate", "Oral contraceptive pill."),
    ("tiotropium", "Anticholinergic inhaler for COPD."),
    ("cyclobenzaprine", "Muscle relaxant."),
    ("cephalexin", "Antibiotic for bacterial infections."),
    ("zolpidem", "Sedative-hypnotic for insomnia."),
    ("esomeprazole", "PPI for GERD and ulcers."),
    ("glipizide", "Sulfonylurea for type 2 diabetes."),
    ("carvedilol", "Beta-blocker for heart failure and hypertension."),
    ("spironolactone", "Potassium-sparing diuretic."),
    ("topiramate", "Antiepileptic, also used for migraines."),
    ("diazepam", "Benzodiazepine for anxiety, seizures."),
    ("lamotrigine", "Antiepileptic, also for bipolar disorder."),
    ("clonazepam", "Benzodiazepine for seizures and anxiety."),
    ("apixaban", "Anticoagulant (Factor Xa inhibitor)."),
    ("rivaroxaban", "Anticoagulant (Factor Xa inhibitor)."),
    ("ezetimibe", "Cholesterol absorption inhibitor."),
    ("quetiapine", "Atypical antipsychotic."),
    ("aripiprazole", "Atypical antipsychotic."),
    ("buspirone", "Anxiolytic."),
    ("hydroxyzine", "Antihistamine, used for anxiety and allergies."),
    ("diclofenac", "NSAID for pain and inflammation."),
    ("naproxen", "NSAID for pain and inflammation."),
    ("morphine", "Opioid for severe pain."),
    ("pregabalin", "Used for nerve pain and seizures."),
    ("metoclopramide", "For nausea and gastroparesis."),
    ("fentanyl", "Potent opioid for severe pain."),
    ("hydromorphone", "Potent opioid for severe pain."),
    ("buprenorphine", "Opioid for pain and opioid dependence."),
    ("methadone", "Opioid for pain and opioid dependence."),
    ("pioglitazone", "Thiazolidinedione for type 2 diabetes."),
    ("sitagliptin", "DPP-4 inhibitor for diabetes."),
    ("liraglutide", "GLP-1 agonist for diabetes."),
    ("canagliflozin", "SGLT2 inhibitor for diabetes."),
    ("empagliflozin", "SGLT2 inhibitor for diabetes."),
    ("dapagliflozin", "SGLT2 inhibitor for diabetes."),
    ("erythromycin", "Antibiotic."),
    ("doxycycline", "Tetracycline antibiotic."),
    ("levofloxacin", "Fluoroquinolone antibiotic."),
    ("ciprofloxacin", "Fluoroquinolone antibiotic."),
    ("azithromycin", "Macrolide antibiotic."),
    ("nitrofurantoin", "Antibiotic for UTIs."),
    ("trimethoprim", "Antibiotic combination."),
    ("sulfamethoxazole", "Antibiotic combination."),
    ("bactrim", "Antibiotic combination."),
    ("clindamycin", "Lincosamide antibiotic."),
    ("vancomycin", "Glycopeptide antibiotic."),
    ("linezolid", "Oxazolidinone antibiotic."),
    ("mupirocin", "Topical antibiotic."),
    ("ketoconazole", "Antifungal."),
    ("fluconazole", "Antifungal."),
    ("itraconazole", "Antifungal."),
    ("voriconazole", "Antifungal."),
    ("terbinafine", "Antifungal."),
    ("valacyclovir", "Antiviral for herpes viruses."),
    ("acyclovir", "Antiviral for herpes viruses."),
    ("oseltamivir", "Antiviral for influenza."),
    ("methotrexate", "Immunosuppressant, anticancer."),
    ("hydroxychloroquine", "Used for malaria and autoimmune diseases."),
    ("adalimumab", "Biologic for autoimmune diseases."),
    ("etanercept", "Biologic for autoimmune diseases."),
    ("infliximab", "Biologic for autoimmune diseases."),
    ("beclomethasone", "Inhaled corticosteroid."),
    ("budesonide", "Corticosteroid for asthma."),
    ("mometasone", "Nasal spray for allergies."),
    ("salmeterol", "Long-acting beta-agonist for asthma and COPD."),
    ("formoterol", "Long-acting beta-agonist for asthma and COPD."),
    ("varenicline", "Smoking cessation aid."),
    ("nicotine patch", "Smoking cessation therapy."),
    ("baclofen", "Muscle relaxant."),
    ("tizanidine", "Muscle relaxant."),
    ("phenytoin", "Antiepileptic."),
    ("valproic acid", "Antiepileptic, mood stabilizer."),
    ("lithium", "Mood stabilizer for bipolar disorder."),
    ("haloperidol", "Typical antipsychotic."),
    ("chlorpromazine", "Typical antipsychotic."),
    ("olanzapine", "Atypical antipsychotic."),
    ("risperidone", "Atypical antipsychotic."),
    ("tylenol", "Pain reliever, fever reducer."),
    ("ibuprofen", "NSAID pain reliever and fever reducer."),
    ("advil", "NSAID pain reliever and fever reducer."),
    ("motrin", "NSAID pain reliever and fever reducer."),
    ("aspirin", "Pain reliever, fever reducer, blood thinner."),
    ("diphenhydramine", "Antihistamine for allergies and sleep."),
    ("benadryl", "Antihistamine for allergies and sleep."),
    ("fexofenadine", "Non-drowsy antihistamine."),
    ("loratadine", "Non-drowsy antihistamine."),
    ("claritin", "Non-drowsy antihistamine."),
    ("cetirizine", "Non-drowsy antihistamine."),
    ("zyrtec", "Non-drowsy antihistamine."),
    ("ranitidine", "H2 blocker for GERD (withdrawn in many markets)."),
    ("famotidine", "H2 blocker for GERD."),
    ("prilosec", "PPI for GERD and ulcers."),
    ("pepcid", "H2 blocker for GERD."),
    ("lansoprazole", "PPI for GERD and ulcers."),
    ("prevacid", "PPI for GERD and ulcers."),
    ("protonix", "PPI for GERD and ulcers."),
    ("nexium", "PPI for GERD and ulcers."),
    ("allegra", "Non-drowsy antihistamine."),
    ("ventolin", "Inhaler for asthma and COPD."),
    ("proair", "Inhaler for asthma and COPD."),
    ("advair", "Combination inhaler for asthma and COPD."),
    ("ipratropium", "Inhaler for COPD."),
    ("spiriva", "Inhaler for COPD."),
    ("theophylline", "Bronchodilator for asthma and COPD."),
    ("singulair", "Leukotriene receptor antagonist for asthma."),
    ("atrovent", "Inhaler for COPD."),
    ("flonase", "Nasal spray for allergies."),
    ("flovent", "Inhaled corticosteroid for asthma."),
    ("nasonex", "Nasal spray for allergies."),
    ("pulmicort", "Inhaled corticosteroid for asthma."),
    ("triamcinolone", "Corticosteroid for allergies."),
    ("loperamide", "Anti-diarrheal."),
    ("prochlorperazine", "For nausea and vertigo."),
    ("imodium", "Anti-diarrheal."),
    ("bismuth subsalicylate", "For upset stomach and diarrhea."),
    ("pepto-bismol", "For upset stomach and diarrhea."),
    ("melatonin", "Sleep aid."),
    ("guaifenesin", "Expectorant for cough."),
    ("mucinex", "Expectorant for cough."),
    ("codeine", "Cough suppressant and pain reliever."),
    ("dextromethorphan", "Cough suppressant."),
    ("pseudoephedrine", "Decongestant."),
    ("sudafed", "Decongestant."),
    ("phenylephrine", "Decongestant."),
    ("ondansetron", "Antiemetic for nausea."),
    ("meclizine", "Motion sickness and vertigo."),
    ("calcium carbonate", "Antacid for heartburn."),
    ("tums", "Antacid for heartburn."),
    ("magnesium hydroxide", "Antacid and laxative."),
    ("milk of magnesia", "Antacid and laxative."),
    ("docusate sodium", "Stool softener."),
    ("colace", "Stool softener."),
    ("bisacodyl", "Stimulant laxative."),
    ("senna", "Laxative."),
    ("polyethylene glycol", "Osmotic laxative."),
    ("miralax", "Osmotic laxative."),
    ("aluminum hydroxide", "Antacid."),
    ("simethicone", "Anti-gas."),
    ("pepcid ac", "H2 blocker for GERD."),
    ("zantac", "H2 blocker for GERD (withdrawn in many markets)."),
];
